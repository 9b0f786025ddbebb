//! String-backed enums mapping to TEXT columns with CHECK constraints.
//!
//! Each enum's wire values (serde snake_case) must match the CHECK
//! constraint lists in the migrations; the tests below pin them.

macro_rules! define_str_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq,
            serde::Serialize, serde::Deserialize, sqlx::Type,
        )]
        #[serde(rename_all = "snake_case")]
        #[sqlx(type_name = "text", rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// The database/wire representation.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $value ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $value => Ok($name::$variant), )+
                    other => Err(format!(
                        concat!("invalid ", stringify!($name), ": {}"),
                        other
                    )),
                }
            }
        }
    };
}

define_str_enum! {
    /// Identity role of a user.
    UserRole {
        Manager => "manager",
        Mentor => "mentor",
        Buddy => "buddy",
    }
}

define_str_enum! {
    /// Domain specialization track. Scopes which topics apply to a user.
    DomainRole {
        Frontend => "frontend",
        Backend => "backend",
        Devops => "devops",
        Qa => "qa",
        Hr => "hr",
    }
}

define_str_enum! {
    /// Buddy lifecycle status.
    BuddyStatus {
        Active => "active",
        Inactive => "inactive",
        Exited => "exited",
    }
}

define_str_enum! {
    /// Stored task status. `overdue` is intentionally absent: it is a
    /// derived view computed from `due_date`, never persisted.
    TaskStatus {
        Pending => "pending",
        InProgress => "in_progress",
        Completed => "completed",
    }
}
