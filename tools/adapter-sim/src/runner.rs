//! Scenario execution against in-memory ledgers.

use std::fmt::Write as _;
use std::sync::Arc;

use fee_adapter::{
    fmt_address, format_units, parse_units, AdapterConfig, AdapterError, Address, FeeAdapter,
    FeeAdapterApi, FungibleToken, InMemoryToken, InMemoryVault, MetricsRecorder,
};
use primitive_types::U256;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::scenario::{Scenario, ScenarioStep, Step};

/// Derive a stable address from an account name: the first 20 bytes of
/// `sha256(name)`.
pub fn account_address(name: &str) -> Address {
    let digest = Sha256::digest(name.as_bytes());
    let mut address = [0u8; 20];
    address.copy_from_slice(&digest[..20]);
    address
}

/// Per-account row of a status table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountStatus {
    /// Account name
    pub name: String,
    /// Hex address
    pub address: String,
    /// Adapter shares (settled view)
    pub shares: String,
    /// Asset value of those shares
    pub value: String,
    /// Withdrawable assets under the liquidity clamp
    pub max_withdraw: String,
    /// Asset held in the wallet
    pub wallet: String,
}

/// Adapter state after a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    /// Live valuation
    pub total_assets: String,
    /// Checkpoint
    pub previous_total_assets: String,
    /// Supply including pending fee shares
    pub total_supply: String,
    /// Assets per share
    pub share_price: String,
    /// Fee shares not yet minted
    pub pending_fee_shares: String,
    /// Current fee rate
    pub fee_pct: String,
    /// Tracked accounts
    pub accounts: Vec<AccountStatus>,
}

impl Status {
    /// Row for `name`, if tracked.
    pub fn account(&self, name: &str) -> Option<&AccountStatus> {
        self.accounts.iter().find(|a| a.name == name)
    }
}

/// Outcome of one step.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    /// Position in the scenario, from 1
    pub index: usize,
    /// Operation label
    pub op: &'static str,
    /// Amount returned by the operation, if any
    pub result: Option<String>,
    /// Error message on failure
    pub error: Option<String>,
    /// Error kind on failure
    pub error_kind: Option<&'static str>,
    /// Error kind the scenario expected
    pub expected_error: Option<String>,
    /// Whether the outcome matched the expectation
    pub matched: bool,
    /// State after the step
    pub status: Status,
}

/// Outcome of a full scenario.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    /// Scenario name
    pub name: String,
    /// Per-step outcomes
    pub steps: Vec<StepReport>,
    /// Steps whose outcome did not match the expectation
    pub mismatches: usize,
    /// Events journaled by the adapter
    pub events: usize,
}

impl ScenarioReport {
    /// Status after the last step.
    pub fn final_status(&self) -> Option<&Status> {
        self.steps.last().map(|s| &s.status)
    }
}

/// A live adapter wired to in-memory asset and vault ledgers.
pub struct Simulation {
    decimals: u8,
    adapter_address: Address,
    asset: Arc<InMemoryToken>,
    stray: Arc<InMemoryToken>,
    vault: Arc<InMemoryVault>,
    adapter: FeeAdapter<InMemoryVault, InMemoryToken>,
    accounts: Vec<(String, Address)>,
}

impl Simulation {
    /// Build the ledgers and adapter described by `scenario`.
    pub fn new(
        scenario: &Scenario,
        metrics: Arc<dyn MetricsRecorder>,
    ) -> Result<Self, AdapterError> {
        let decimals = scenario.decimals;
        let adapter_address = account_address("adapter");

        let asset = Arc::new(InMemoryToken::new(account_address("asset"), "AST", decimals));
        let stray = Arc::new(InMemoryToken::new(account_address("stray"), "STRAY", decimals));
        let factor = parse_units(&scenario.liquidity_factor, 18)?;
        let vault = Arc::new(
            InMemoryVault::new(account_address("vault"), asset.clone())
                .with_liquidity_factor(factor),
        );

        let config = AdapterConfig::new(
            parse_units(&scenario.fee_pct, 18)?,
            account_address(&scenario.fee_collector),
            account_address(&scenario.owner),
        )?;
        let adapter = FeeAdapter::new(adapter_address, vault.clone(), asset.clone(), config)?
            .with_metrics(metrics);

        let mut simulation = Self {
            decimals,
            adapter_address,
            asset,
            stray,
            vault,
            adapter,
            accounts: Vec::new(),
        };
        simulation.account(&scenario.owner);
        simulation.account(&scenario.fee_collector);
        for name in &scenario.accounts {
            simulation.account(name);
        }
        Ok(simulation)
    }

    /// The adapter under test.
    pub fn adapter(&self) -> &FeeAdapter<InMemoryVault, InMemoryToken> {
        &self.adapter
    }

    /// Address for `name`, tracking it in status tables from now on.
    pub fn account(&mut self, name: &str) -> Address {
        if let Some((_, address)) = self.accounts.iter().find(|(n, _)| n == name) {
            return *address;
        }
        let address = account_address(name);
        self.accounts.push((name.to_string(), address));
        address
    }

    fn amount(&self, value: &str) -> Result<U256, AdapterError> {
        parse_units(value, self.decimals)
    }

    /// Execute one step, returning the amount the operation reports.
    pub fn apply(&mut self, step: &Step) -> Result<Option<U256>, AdapterError> {
        match step {
            Step::Fund { account, amount } => {
                let who = self.account(account);
                let amount = self.amount(amount)?;
                self.asset.mint(&who, amount)?;
                self.asset.approve(&who, &self.adapter_address, U256::MAX)?;
                Ok(Some(amount))
            }
            Step::Deposit {
                account,
                amount,
                receiver,
            } => {
                let who = self.account(account);
                let to = self.account(receiver.as_deref().unwrap_or(account));
                let amount = self.amount(amount)?;
                self.adapter.deposit(&who, amount, &to).map(Some)
            }
            Step::Mint {
                account,
                shares,
                receiver,
            } => {
                let who = self.account(account);
                let to = self.account(receiver.as_deref().unwrap_or(account));
                let shares = self.amount(shares)?;
                self.adapter.mint(&who, shares, &to).map(Some)
            }
            Step::Withdraw {
                account,
                amount,
                receiver,
            } => {
                let who = self.account(account);
                let to = self.account(receiver.as_deref().unwrap_or(account));
                let amount = self.amount(amount)?;
                self.adapter.withdraw(&who, amount, &to, &who).map(Some)
            }
            Step::WithdrawMax { account } => {
                let who = self.account(account);
                let amount = self.adapter.max_withdraw(&who)?;
                self.adapter.withdraw(&who, amount, &who, &who)?;
                Ok(Some(amount))
            }
            Step::Redeem { account, shares } => {
                let who = self.account(account);
                let shares = self.amount(shares)?;
                self.adapter.redeem(&who, shares, &who, &who).map(Some)
            }
            Step::RedeemMax { account } => {
                let who = self.account(account);
                let shares = self.adapter.max_redeem(&who)?;
                self.adapter.redeem(&who, shares, &who, &who).map(Some)
            }
            Step::Transfer { from, to, shares } => {
                let sender = self.account(from);
                let recipient = self.account(to);
                let shares = self.amount(shares)?;
                self.adapter.transfer(&sender, &recipient, shares)?;
                Ok(Some(shares))
            }
            Step::Yield { amount } => {
                let amount = self.amount(amount)?;
                self.vault.accrue_yield(amount)?;
                Ok(Some(amount))
            }
            Step::Drain { amount } => {
                let amount = self.amount(amount)?;
                self.vault.drain(amount)?;
                Ok(Some(amount))
            }
            Step::SetLiquidity { factor } => {
                let factor = parse_units(factor, 18)?;
                self.vault.set_liquidity_factor(factor);
                Ok(None)
            }
            Step::SetFeeCollector { caller, collector } => {
                let who = self.account(caller);
                let collector = self.account(collector);
                self.adapter.set_fee_collector(&who, &collector)?;
                Ok(None)
            }
            Step::SetFeePct { caller, pct } => {
                let who = self.account(caller);
                let pct = parse_units(pct, 18)?;
                self.adapter.set_fee_pct(&who, pct)?;
                Ok(None)
            }
            Step::TransferOwnership { caller, new_owner } => {
                let who = self.account(caller);
                let new_owner = self.account(new_owner);
                self.adapter.transfer_ownership(&who, &new_owner)?;
                Ok(None)
            }
            Step::Stray { amount } => {
                let amount = self.amount(amount)?;
                self.stray.mint(&self.adapter_address, amount)?;
                Ok(Some(amount))
            }
            Step::Rescue {
                caller,
                recipient,
                amount,
                vault_token,
            } => {
                let who = self.account(caller);
                let recipient = self.account(recipient);
                let amount = self.amount(amount)?;
                let token: &dyn FungibleToken = if *vault_token {
                    self.vault.as_ref()
                } else {
                    self.stray.as_ref()
                };
                self.adapter.rescue_funds(&who, token, &recipient, amount)?;
                Ok(Some(amount))
            }
        }
    }

    /// Current state in display units.
    pub fn status(&self) -> Status {
        let show = |value: Result<U256, AdapterError>, decimals: u8| match value {
            Ok(v) => format_units(v, decimals),
            Err(e) => format!("<{}>", e.kind()),
        };

        let accounts = self
            .accounts
            .iter()
            .map(|(name, address)| {
                let shares = self.adapter.balance_of(address);
                let value = shares
                    .clone()
                    .and_then(|s| self.adapter.convert_to_assets(s));
                AccountStatus {
                    name: name.clone(),
                    address: fmt_address(address),
                    shares: show(shares, self.decimals),
                    value: show(value, self.decimals),
                    max_withdraw: show(self.adapter.max_withdraw(address), self.decimals),
                    wallet: format_units(self.asset.balance_of(address), self.decimals),
                }
            })
            .collect();

        Status {
            total_assets: format_units(self.adapter.total_assets(), self.decimals),
            previous_total_assets: format_units(
                self.adapter.previous_total_assets(),
                self.decimals,
            ),
            total_supply: show(self.adapter.total_supply(), self.decimals),
            share_price: show(self.adapter.share_price(), 18),
            pending_fee_shares: show(self.adapter.pending_fee_shares(), self.decimals),
            fee_pct: format_units(self.adapter.fee_pct(), 18),
            accounts,
        }
    }

    /// Run the steps of `scenario`, collecting a report.
    ///
    /// With `strict`, stops at the first step whose outcome differs from its
    /// expectation.
    pub fn run(&mut self, scenario: &Scenario, strict: bool) -> ScenarioReport {
        let mut steps = Vec::with_capacity(scenario.steps.len());
        for (i, entry) in scenario.steps.iter().enumerate() {
            let report = self.run_step(i + 1, entry);
            let matched = report.matched;
            steps.push(report);
            if strict && !matched {
                warn!(step = i + 1, "aborting strict run");
                break;
            }
        }

        let mismatches = steps.iter().filter(|s| !s.matched).count();
        info!(
            scenario = %scenario.name,
            steps = steps.len(),
            mismatches,
            "scenario finished"
        );

        ScenarioReport {
            name: scenario.name.clone(),
            steps,
            mismatches,
            events: self.adapter.events().len(),
        }
    }

    fn run_step(&mut self, index: usize, entry: &ScenarioStep) -> StepReport {
        let op = entry.step.op();
        let outcome = self.apply(&entry.step);

        let (result, error, error_kind) = match &outcome {
            Ok(value) => (value.map(|v| format_units(v, self.decimals)), None, None),
            Err(e) => (None, Some(e.to_string()), Some(e.kind())),
        };
        let matched = match (error_kind, entry.expect_error.as_deref()) {
            (None, None) => true,
            (Some(kind), Some(expected)) => kind == expected,
            _ => false,
        };

        if matched {
            info!(step = index, op, ?error_kind, "step applied");
        } else {
            warn!(
                step = index,
                op,
                ?error_kind,
                expected = ?entry.expect_error,
                "step outcome differs from expectation"
            );
        }

        StepReport {
            index,
            op,
            result,
            error,
            error_kind,
            expected_error: entry.expect_error.clone(),
            matched,
            status: self.status(),
        }
    }

    /// Encoded adapter snapshot.
    pub fn snapshot_bytes(&self) -> Result<Vec<u8>, AdapterError> {
        self.adapter.snapshot().encode()
    }
}

/// Render a report as plain-text tables.
pub fn render_text(report: &ScenarioReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "scenario: {}", report.name);

    for step in &report.steps {
        let outcome = match (&step.result, &step.error) {
            (_, Some(err)) => format!("error: {err}"),
            (Some(value), None) => format!("ok: {value}"),
            (None, None) => "ok".to_string(),
        };
        let flag = if step.matched { "" } else { "  [UNEXPECTED]" };
        let _ = writeln!(out, "\n#{:<3} {:<18} {}{}", step.index, step.op, outcome, flag);

        let s = &step.status;
        let _ = writeln!(
            out,
            "     total_assets={} checkpoint={} supply={} price={} pending_fee={} fee_pct={}",
            s.total_assets,
            s.previous_total_assets,
            s.total_supply,
            s.share_price,
            s.pending_fee_shares,
            s.fee_pct
        );
        let _ = writeln!(
            out,
            "     {:<12} {:>28} {:>28} {:>28} {:>28}",
            "account", "shares", "value", "max_withdraw", "wallet"
        );
        for a in &s.accounts {
            let _ = writeln!(
                out,
                "     {:<12} {:>28} {:>28} {:>28} {:>28}",
                a.name, a.shares, a.value, a.max_withdraw, a.wallet
            );
        }
    }

    let _ = writeln!(
        out,
        "\n{} steps, {} unexpected, {} events",
        report.steps.len(),
        report.mismatches,
        report.events
    );
    out
}
