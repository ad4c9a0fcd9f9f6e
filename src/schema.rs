//! Static table model: the five CRM tables, their writable columns and foreign-key cascades.
//! Identifiers used by the SQL builder come only from here.

/// Column type as declared in DDL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SqlType {
    Varchar(u32),
    Text,
    Integer,
}

impl SqlType {
    pub fn ddl(&self) -> String {
        match self {
            SqlType::Varchar(n) => format!("VARCHAR({})", n),
            SqlType::Text => "TEXT".into(),
            SqlType::Integer => "INTEGER".into(),
        }
    }

    /// Cast applied to bound parameters so NULLs get the column's type.
    pub fn cast(&self) -> Option<&'static str> {
        match self {
            SqlType::Integer => Some("integer"),
            SqlType::Varchar(_) | SqlType::Text => None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Column {
    pub name: &'static str,
    pub sql_type: SqlType,
    pub nullable: bool,
}

const fn required(name: &'static str, sql_type: SqlType) -> Column {
    Column { name, sql_type, nullable: false }
}

const fn optional(name: &'static str, sql_type: SqlType) -> Column {
    Column { name, sql_type, nullable: true }
}

/// Child-to-parent link. Deleting the parent row removes the child (ON DELETE CASCADE).
#[derive(Clone, Copy, Debug)]
pub struct ForeignKey {
    pub column: &'static str,
    pub references: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Table {
    pub name: &'static str,
    /// Writable columns in bind order. `id` and the timestamp are generated.
    pub columns: &'static [Column],
    /// Insert-time timestamp; lists are ordered by it, newest first.
    pub timestamp_column: &'static str,
    pub parent: Option<ForeignKey>,
    pub unique: &'static [&'static str],
}

impl Table {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// All columns in the order returned by SELECT / RETURNING.
    pub fn all_column_names(&self) -> Vec<&'static str> {
        let mut names = Vec::with_capacity(self.columns.len() + 2);
        names.push("id");
        names.extend(self.columns.iter().map(|c| c.name));
        names.push(self.timestamp_column);
        names
    }
}

pub const ACCOUNTS: Table = Table {
    name: "accounts",
    columns: &[
        required("name", SqlType::Varchar(255)),
        optional("industry", SqlType::Varchar(100)),
        optional("plan", SqlType::Varchar(50)),
        optional("status", SqlType::Varchar(50)),
    ],
    timestamp_column: "created_at",
    parent: None,
    unique: &[],
};

pub const CONTACTS: Table = Table {
    name: "contacts",
    columns: &[
        required("account_id", SqlType::Integer),
        required("first_name", SqlType::Varchar(100)),
        required("last_name", SqlType::Varchar(100)),
        required("email", SqlType::Varchar(255)),
        optional("phone", SqlType::Varchar(50)),
        optional("title", SqlType::Varchar(100)),
        optional("role", SqlType::Varchar(100)),
    ],
    timestamp_column: "created_at",
    parent: Some(ForeignKey { column: "account_id", references: "accounts" }),
    unique: &["email"],
};

pub const EMAILS: Table = Table {
    name: "emails",
    columns: &[
        required("contact_id", SqlType::Integer),
        required("subject", SqlType::Varchar(255)),
        optional("body", SqlType::Text),
    ],
    timestamp_column: "sent_at",
    parent: Some(ForeignKey { column: "contact_id", references: "contacts" }),
    unique: &[],
};

pub const CALLS: Table = Table {
    name: "calls",
    columns: &[
        required("contact_id", SqlType::Integer),
        required("call_type", SqlType::Varchar(50)),
        optional("duration", SqlType::Integer),
        optional("outcome", SqlType::Varchar(255)),
    ],
    timestamp_column: "created_at",
    parent: Some(ForeignKey { column: "contact_id", references: "contacts" }),
    unique: &[],
};

pub const CALL_TRANSCRIPTS: Table = Table {
    name: "call_transcripts",
    columns: &[
        required("call_id", SqlType::Integer),
        required("transcript", SqlType::Text),
    ],
    timestamp_column: "created_at",
    parent: Some(ForeignKey { column: "call_id", references: "calls" }),
    unique: &[],
};

/// Dependency order: every parent precedes its children.
pub const TABLES: [&Table; 5] = [&ACCOUNTS, &CONTACTS, &EMAILS, &CALLS, &CALL_TRANSCRIPTS];
