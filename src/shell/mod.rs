//! Interactive shell
//!
//! A text menu over a [`Session`]. The shell is generic over its input and
//! output so it can run on stdin/stdout or on in-memory buffers in tests.
//! Every domain failure is printed and the menu comes back; only I/O errors
//! end the loop early.

pub mod menu;

pub use menu::MenuCommand;

use crate::core::{format_amount, parse_amount};
use crate::error::{BankError, Result};
use crate::session::Session;
use log::debug;
use std::io::{BufRead, Write};

const MENU: &str = "
=========== MENU ===========
[nu] New user
[nc] New account
[lu] List users
[lc] List accounts
[sc] Select active account
----------------------------
[d]  Deposit
[s]  Withdraw
[e]  Statement
[q]  Quit
============================
=> ";

/// Whether the loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell<R, W> {
    session: Session,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(session: Session, input: R, output: W) -> Shell<R, W> {
        Shell {
            session,
            input,
            output,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_parts(self) -> (Session, W) {
        (self.session, self.output)
    }

    /// Run the menu until `quit` or end of input
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_active_header()?;
            let Some(line) = self.prompt(MENU)? else {
                break;
            };

            let outcome = match line.parse::<MenuCommand>() {
                Ok(command) => self.dispatch(command),
                Err(_) => {
                    writeln!(
                        self.output,
                        "Invalid operation, please select the desired operation again."
                    )?;
                    Ok(Flow::Continue)
                }
            };

            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e @ BankError::Io(_)) => return Err(e),
                Err(e) => writeln!(self.output, "Operation failed! {e}")?,
            }
        }
        writeln!(self.output, "Exiting... See you soon!")?;
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, command: MenuCommand) -> Result<Flow> {
        debug!("Menu command: {command}");
        match command {
            MenuCommand::NewUser => self.new_user(),
            MenuCommand::NewAccount => self.new_account(),
            MenuCommand::ListUsers => self.list_users(),
            MenuCommand::ListAccounts => self.list_accounts(),
            MenuCommand::SelectAccount => self.select_account(),
            MenuCommand::Deposit => self.deposit(),
            MenuCommand::Withdraw => self.withdraw(),
            MenuCommand::Statement => self.statement(),
            MenuCommand::Quit => Ok(Flow::Quit),
        }
    }

    /// Print `label`, then read one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn print_active_header(&mut self) -> Result<()> {
        match self.session.active_account() {
            Some(account) => writeln!(
                self.output,
                "\nActive account: Branch {} | No. {} | Holder: {}",
                account.get_branch_code(),
                account.get_account_number(),
                self.session.owner_name(account)
            )?,
            None => writeln!(
                self.output,
                "\nNo active account. Select an account (option [sc])."
            )?,
        }
        Ok(())
    }

    fn new_user(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n=== New user ===")?;
        let Some(full_name) = self.prompt("Full name: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(birth_date) = self.prompt("Birth date (DD/MM/YYYY): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(raw_id) = self.prompt("Personal ID (digits, any format): ")? else {
            return Ok(Flow::Quit);
        };
        // Reject before asking for the address.
        self.session.users().check_new_id(&raw_id)?;
        let Some(address) = self.prompt("Address (street, number - district - city/state): ")?
        else {
            return Ok(Flow::Quit);
        };

        self.session
            .register_user(&full_name, &birth_date, &raw_id, &address)?;
        writeln!(self.output, "User created successfully!")?;
        Ok(Flow::Continue)
    }

    fn new_account(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n=== New checking account ===")?;
        let Some(raw_id) = self.prompt("Holder's personal ID: ")? else {
            return Ok(Flow::Quit);
        };

        let account = self.session.open_account(&raw_id)?;
        let (branch, number) = (
            account.get_branch_code().to_string(),
            account.get_account_number(),
        );
        let holder = self
            .session
            .users()
            .find_user(&raw_id)
            .map(|user| user.get_full_name().to_string())
            .unwrap_or_default();
        writeln!(
            self.output,
            "Account created successfully! Branch {branch} | No. {number} | Holder: {holder}"
        )?;
        Ok(Flow::Continue)
    }

    fn list_users(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n=== Registered users ===")?;
        let users = self.session.users().list_users();
        if users.is_empty() {
            writeln!(self.output, "(empty)")?;
        }
        for user in users {
            writeln!(
                self.output,
                "- {} | ID: {} | Born: {} | Address: {}",
                user.get_full_name(),
                user.get_personal_id(),
                user.get_birth_date(),
                user.get_address()
            )?;
        }
        Ok(Flow::Continue)
    }

    fn list_accounts(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n=== Registered accounts ===")?;
        let listing = self.session.list_accounts();
        if listing.is_empty() {
            writeln!(self.output, "(empty)")?;
        }
        for (account, holder) in listing {
            let limits = account.get_limits();
            writeln!(
                self.output,
                "Branch: {} | Account: {} | Holder: {} | Balance: {} | Withdrawals used: {}/{}",
                account.get_branch_code(),
                account.get_account_number(),
                holder,
                format_amount(account.get_balance()),
                account.get_withdrawal_count(),
                limits.withdrawal_count_limit
            )?;
        }
        Ok(Flow::Continue)
    }

    fn select_account(&mut self) -> Result<Flow> {
        if self.session.accounts().is_empty() {
            writeln!(self.output, "No accounts registered.")?;
            return Ok(Flow::Continue);
        }
        let Some(raw) = self.prompt("Enter the number of the account to select: ")? else {
            return Ok(Flow::Quit);
        };
        let number: u32 = match raw.parse() {
            Ok(number) => number,
            Err(_) => {
                // A failed selection leaves no account active.
                self.session.clear_active_account();
                return Err(BankError::InvalidInput(format!(
                    "{raw:?} is not an account number"
                )));
            }
        };

        self.session.select_account(number)?;
        writeln!(self.output, "Account {number} selected.")?;
        Ok(Flow::Continue)
    }

    fn deposit(&mut self) -> Result<Flow> {
        if self.session.active_account().is_none() {
            return Err(BankError::NoActiveAccount);
        }
        let Some(raw) = self.prompt("Enter the deposit amount: ")? else {
            return Ok(Flow::Quit);
        };
        let entry = self.session.deposit(parse_amount(&raw)?)?;
        writeln!(self.output, "Deposit made: {}", format_amount(entry.amount))?;
        Ok(Flow::Continue)
    }

    fn withdraw(&mut self) -> Result<Flow> {
        if self.session.active_account().is_none() {
            return Err(BankError::NoActiveAccount);
        }
        let Some(raw) = self.prompt("Enter the withdrawal amount: ")? else {
            return Ok(Flow::Quit);
        };
        let entry = self.session.withdraw(parse_amount(&raw)?)?;
        writeln!(self.output, "Withdrawal made: {}", format_amount(entry.amount))?;
        Ok(Flow::Continue)
    }

    fn statement(&mut self) -> Result<Flow> {
        let statement = self.session.statement()?;
        writeln!(self.output, "\n{statement}")?;
        Ok(Flow::Continue)
    }
}
