//! Synthetic data for local development: accounts, contacts spread over them, emails spread over
//! the contacts. Values are deterministic; contact emails embed the account id so repeated runs
//! never collide on the unique email column.

use crate::error::{AppError, ConfigError};
use crate::models::{Account, AccountCreate, Contact, ContactCreate, Email, EmailCreate};
use crate::service::CrudService;
use crate::store::Store;

const COMPANIES: &[&str] = &[
    "Acme", "Globex", "Initech", "Umbrella", "Hooli", "Stark", "Wayne", "Wonka", "Tyrell", "Soylent",
];
const INDUSTRIES: &[&str] = &["Technology", "Manufacturing", "Retail", "Finance", "Healthcare"];
const PLANS: &[&str] = &["Free", "Pro", "Enterprise"];
const FIRST_NAMES: &[&str] = &["Ada", "Grace", "Alan", "Edsger", "Barbara", "Ken", "Linus", "Margaret"];
const LAST_NAMES: &[&str] = &["Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Thompson", "Torvalds", "Hamilton"];
const TITLES: &[&str] = &["CTO", "VP Sales", "Engineer", "Buyer", "Office Manager"];
const SUBJECTS: &[&str] = &[
    "Introduction",
    "Follow-up on our call",
    "Pricing proposal",
    "Renewal reminder",
    "Meeting notes",
    "Product update",
];

/// How many rows of each kind to create.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedPlan {
    pub accounts: usize,
    pub contacts: usize,
    pub emails: usize,
}

impl Default for SeedPlan {
    fn default() -> Self {
        SeedPlan {
            accounts: 10,
            contacts: 30,
            emails: 60,
        }
    }
}

impl SeedPlan {
    /// `SEED_ACCOUNTS`, `SEED_CONTACTS`, `SEED_EMAILS`; unset keys keep the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = SeedPlan::default();
        let count = |key: &'static str, default: usize| -> Result<usize, ConfigError> {
            match lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
                None => Ok(default),
                Some(raw) => raw.parse().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                    key,
                    value: raw.clone(),
                    reason: e.to_string(),
                }),
            }
        };
        let plan = SeedPlan {
            accounts: count("SEED_ACCOUNTS", defaults.accounts)?,
            contacts: count("SEED_CONTACTS", defaults.contacts)?,
            emails: count("SEED_EMAILS", defaults.emails)?,
        };
        if plan.accounts == 0 && plan.contacts > 0 {
            return Err(ConfigError::Validation("SEED_CONTACTS needs at least one account".into()));
        }
        if plan.contacts == 0 && plan.emails > 0 {
            return Err(ConfigError::Validation("SEED_EMAILS needs at least one contact".into()));
        }
        Ok(plan)
    }
}

/// Rows actually created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub accounts: usize,
    pub contacts: usize,
    pub emails: usize,
}

fn pick<'a>(list: &[&'a str], i: usize) -> &'a str {
    list[i % list.len()]
}

fn account_input(i: usize) -> AccountCreate {
    let round = i / COMPANIES.len();
    let name = if round == 0 {
        format!("{} Corp", pick(COMPANIES, i))
    } else {
        format!("{} Corp {}", pick(COMPANIES, i), round + 1)
    };
    AccountCreate {
        name,
        industry: Some(pick(INDUSTRIES, i).to_string()),
        plan: Some(pick(PLANS, i).to_string()),
        status: Some("active".to_string()),
    }
}

fn contact_input(i: usize, account_id: i32) -> ContactCreate {
    let first = pick(FIRST_NAMES, i);
    let last = pick(LAST_NAMES, i / FIRST_NAMES.len() + i);
    ContactCreate {
        account_id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!(
            "{}.{}.{}.{}@example.com",
            first.to_lowercase(),
            last.to_lowercase(),
            account_id,
            i
        ),
        phone: Some(format!("+1-555-{:04}", i % 10_000)),
        title: Some(pick(TITLES, i).to_string()),
        role: None,
    }
}

fn email_input(i: usize, contact_id: i32) -> EmailCreate {
    EmailCreate {
        contact_id,
        subject: pick(SUBJECTS, i).to_string(),
        body: Some(format!("Message {} for contact {}.", i + 1, contact_id)),
    }
}

/// Create the planned rows through `CrudService`, parents first. Children are assigned to
/// parents round-robin.
pub async fn seed(store: &Store, plan: SeedPlan) -> Result<SeedReport, AppError> {
    let mut report = SeedReport::default();

    let mut account_ids = Vec::with_capacity(plan.accounts);
    for i in 0..plan.accounts {
        let account = CrudService::<Account>::create(store, &account_input(i)).await?;
        account_ids.push(account.id);
    }
    report.accounts = account_ids.len();
    tracing::info!(count = report.accounts, "seeded accounts");

    let mut contact_ids = Vec::with_capacity(plan.contacts);
    if !account_ids.is_empty() {
        for i in 0..plan.contacts {
            let account_id = account_ids[i % account_ids.len()];
            let contact = CrudService::<Contact>::create(store, &contact_input(i, account_id)).await?;
            contact_ids.push(contact.id);
        }
    }
    report.contacts = contact_ids.len();
    tracing::info!(count = report.contacts, "seeded contacts");

    if !contact_ids.is_empty() {
        for i in 0..plan.emails {
            let contact_id = contact_ids[i % contact_ids.len()];
            CrudService::<Email>::create(store, &email_input(i, contact_id)).await?;
            report.emails += 1;
        }
    }
    tracing::info!(count = report.emails, "seeded emails");

    Ok(report)
}
