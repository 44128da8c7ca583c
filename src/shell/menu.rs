use std::fmt;
use std::str::FromStr;

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    NewUser,
    NewAccount,
    ListUsers,
    ListAccounts,
    SelectAccount,
    Deposit,
    Withdraw,
    Statement,
    Quit,
}

impl FromStr for MenuCommand {
    type Err = String;

    /// Accepts the short menu key or the long name, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nu" | "new-user" => Ok(MenuCommand::NewUser),
            "nc" | "new-account" => Ok(MenuCommand::NewAccount),
            "lu" | "list-users" => Ok(MenuCommand::ListUsers),
            "lc" | "list-accounts" => Ok(MenuCommand::ListAccounts),
            "sc" | "select-account" => Ok(MenuCommand::SelectAccount),
            "d" | "deposit" => Ok(MenuCommand::Deposit),
            "s" | "withdraw" => Ok(MenuCommand::Withdraw),
            "e" | "statement" => Ok(MenuCommand::Statement),
            "q" | "quit" => Ok(MenuCommand::Quit),
            _ => Err(format!("Invalid operation: {s}")),
        }
    }
}

impl fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuCommand::NewUser => write!(f, "new-user"),
            MenuCommand::NewAccount => write!(f, "new-account"),
            MenuCommand::ListUsers => write!(f, "list-users"),
            MenuCommand::ListAccounts => write!(f, "list-accounts"),
            MenuCommand::SelectAccount => write!(f, "select-account"),
            MenuCommand::Deposit => write!(f, "deposit"),
            MenuCommand::Withdraw => write!(f, "withdraw"),
            MenuCommand::Statement => write!(f, "statement"),
            MenuCommand::Quit => write!(f, "quit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_and_long_names() {
        assert_eq!("nu".parse::<MenuCommand>(), Ok(MenuCommand::NewUser));
        assert_eq!("Deposit".parse::<MenuCommand>(), Ok(MenuCommand::Deposit));
        assert_eq!(" Q ".parse::<MenuCommand>(), Ok(MenuCommand::Quit));
        assert!("x".parse::<MenuCommand>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        let all = [
            MenuCommand::NewUser,
            MenuCommand::NewAccount,
            MenuCommand::ListUsers,
            MenuCommand::ListAccounts,
            MenuCommand::SelectAccount,
            MenuCommand::Deposit,
            MenuCommand::Withdraw,
            MenuCommand::Statement,
            MenuCommand::Quit,
        ];
        for command in all {
            assert_eq!(command.to_string().parse::<MenuCommand>(), Ok(command));
        }
    }
}
