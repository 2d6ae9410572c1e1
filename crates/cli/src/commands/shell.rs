//! Interactive shell - log in by account number and bank over stdin
//!
//! Logged out: `open`, `login`, `list`. Logged in: `details`, `deposit`,
//! `withdraw`, `interest`, `logout`. The snapshot is saved on exit.

use anyhow::Result;
use rust_decimal::Decimal;
use sitbank_business::{Bank, BankConfig, BusinessError, Session};
use sitbank_core::{AccountKind, BankAccount, Withdrawal};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::debug;

use super::write_summary;
use crate::state;

const HELP: &str = "\
Commands:
  open <savings|current> <initial-deposit> <name...>   Create a new account
  login <account-number>                               Log in to your account
  details                                              Show account details
  deposit <amount>                                     Deposit into your account
  withdraw <amount>                                    Withdraw from your account
  interest                                             Interest on a savings balance
  logout                                               Log out
  list                                                 List all accounts
  help                                                 Show this help
  quit                                                 Save and exit";

/// Run the shell on stdin/stdout, then save
pub fn run(state_path: &Path, config: BankConfig) -> Result<()> {
    let mut bank = state::open_bank(state_path, config)?;

    {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        Shell::new(&mut bank).run(stdin.lock(), &mut stdout)?;
    }

    state::save_bank(state_path, &bank)?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// One interactive session over a bank
pub struct Shell<'a> {
    bank: &'a mut Bank,
    session: Session,
}

impl<'a> Shell<'a> {
    pub fn new(bank: &'a mut Bank) -> Self {
        Self {
            bank,
            session: Session::new(),
        }
    }

    /// Read commands until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        let config = self.bank.config();
        writeln!(out, "🏦 Welcome to {}", config.bank_name)?;
        writeln!(out, "{} | Simple Banking", config.branch)?;
        writeln!(out, "Type 'help' for commands.")?;

        for line in input.lines() {
            let line = line?;
            if self.execute(line.trim(), out)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(Flow::Continue);
        };
        let args: Vec<&str> = words.collect();
        debug!(command, "Shell command");

        match command.to_lowercase().as_str() {
            "open" => self.open(&args, out)?,
            "login" => self.login(&args, out)?,
            "logout" => {
                if self.session.logout() {
                    writeln!(out, "🔒 Logged out successfully.")?;
                } else {
                    writeln!(out, "🔐 Please log in first.")?;
                }
            }
            "details" => match self.session.details(&*self.bank) {
                Ok(summary) => write_summary(out, self.bank.config(), &summary)?,
                Err(err) => self.report(&err, out)?,
            },
            "deposit" => self.deposit(&args, out)?,
            "withdraw" => self.withdraw(&args, out)?,
            "interest" => match self.session.interest(&*self.bank) {
                Ok(interest) => writeln!(
                    out,
                    "📈 Interest earned: {}",
                    self.bank.config().format_amount(interest)
                )?,
                Err(err) => self.report(&err, out)?,
            },
            "list" => self.list(out)?,
            "help" => writeln!(out, "{}", HELP)?,
            "quit" | "exit" => return Ok(Flow::Quit),
            other => writeln!(out, "⚠️  Unknown command '{}'. Type 'help'.", other)?,
        }
        Ok(Flow::Continue)
    }

    fn open<W: Write>(&mut self, args: &[&str], out: &mut W) -> io::Result<()> {
        const USAGE: &str = "⚠️  Usage: open <savings|current> <initial-deposit> <name...>";

        let Some(kind) = args.first().and_then(|k| AccountKind::from_str(k)) else {
            return writeln!(out, "{}", USAGE);
        };
        let Some(deposit) = args.get(1).and_then(|a| parse_amount(a)) else {
            return writeln!(out, "{}", USAGE);
        };
        let name = args.get(2..).unwrap_or_default().join(" ");
        if name.is_empty() {
            return writeln!(out, "⚠️  Please enter a name.");
        }

        match self.bank.open_account(&name, kind, deposit) {
            Ok(id) => writeln!(
                out,
                "✅ Account created successfully! Your account number is {}",
                id
            ),
            Err(err) => self.report(&err, out),
        }
    }

    fn login<W: Write>(&mut self, args: &[&str], out: &mut W) -> io::Result<()> {
        let Some(id) = args.first().and_then(|a| a.parse::<u64>().ok()) else {
            return writeln!(out, "⚠️  Usage: login <account-number>");
        };

        match self.session.login(&*self.bank, id) {
            Ok(owner) => writeln!(out, "✅ Welcome, {}!", owner),
            Err(BusinessError::AccountNotFound(_)) => writeln!(out, "❌ Invalid account number."),
            Err(err) => self.report(&err, out),
        }
    }

    fn deposit<W: Write>(&mut self, args: &[&str], out: &mut W) -> io::Result<()> {
        let Some(amount) = args.first().and_then(|a| parse_amount(a)) else {
            return writeln!(out, "⚠️  Usage: deposit <amount>");
        };

        match self.session.deposit(self.bank, amount) {
            Ok(_) => writeln!(
                out,
                "✅ Deposited {}",
                self.bank.config().format_amount(amount)
            ),
            Err(err) => self.report(&err, out),
        }
    }

    fn withdraw<W: Write>(&mut self, args: &[&str], out: &mut W) -> io::Result<()> {
        let Some(amount) = args.first().and_then(|a| parse_amount(a)) else {
            return writeln!(out, "⚠️  Usage: withdraw <amount>");
        };

        match self.session.withdraw(self.bank, amount) {
            Ok(Withdrawal::Completed { amount, .. }) => writeln!(
                out,
                "✅ Withdrawn {}",
                self.bank.config().format_amount(amount)
            ),
            Ok(Withdrawal::InsufficientFunds { .. }) => writeln!(out, "❌ Insufficient balance."),
            Err(err) => self.report(&err, out),
        }
    }

    fn list<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.bank.is_empty() {
            return writeln!(out, "No accounts found.");
        }
        for account in self.bank.accounts() {
            writeln!(
                out,
                "  #{:<6} {:<20} {:<8} {}",
                account.id(),
                account.owner_name(),
                account.kind().label(),
                self.bank.config().format_amount(account.get_balance())
            )?;
        }
        Ok(())
    }

    /// User-facing message for a business error
    fn report<W: Write>(&self, err: &BusinessError, out: &mut W) -> io::Result<()> {
        match err {
            BusinessError::NotLoggedIn => writeln!(out, "🔐 Please log in first."),
            BusinessError::AccountNotFound(_) => writeln!(out, "❌ Invalid account number."),
            BusinessError::InterestNotSupported(_) => writeln!(
                out,
                "ℹ️  Interest is only available for savings accounts."
            ),
            err if err.is_invalid_input() => writeln!(out, "⚠️  {}", err),
            err => writeln!(out, "❌ {}", err),
        }
    }
}

fn parse_amount(s: &str) -> Option<Decimal> {
    s.parse::<Decimal>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    fn run_script(bank: &mut Bank, script: &str) -> String {
        let mut out = Vec::new();
        Shell::new(bank)
            .run(Cursor::new(script.to_string()), &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_banner() {
        let mut bank = Bank::default();
        let out = run_script(&mut bank, "");
        assert!(out.contains("Welcome to SIT Bank"));
        assert!(out.contains("Nagpur Branch"));
    }

    #[test]
    fn test_full_session() {
        let mut bank = Bank::default();
        let script = "\
open savings 1000 Asha
login 1
deposit 500
withdraw 2000
interest
withdraw 1500
details
logout
quit
";
        let out = run_script(&mut bank, script);

        assert!(out.contains("Your account number is 1"));
        assert!(out.contains("Welcome, Asha!"));
        assert!(out.contains("Deposited ₹500.00"));
        assert!(out.contains("Insufficient balance."));
        assert!(out.contains("Interest earned: ₹60.00"));
        assert!(out.contains("Withdrawn ₹1500.00"));
        assert!(out.contains("Current Balance: ₹0.00"));
        assert!(out.contains("Logged out successfully."));
        assert_eq!(bank.balance(1).unwrap(), dec!(0));
    }

    #[test]
    fn test_invalid_login() {
        let mut bank = Bank::default();
        let out = run_script(&mut bank, "login 7\ndeposit 10\n");

        assert!(out.contains("Invalid account number."));
        assert!(out.contains("Please log in first."));
    }

    #[test]
    fn test_open_validation() {
        let mut bank = Bank::default();
        let out = run_script(&mut bank, "open savings 100\nopen loan 100 Raj\nopen current -5 Raj\n");

        assert!(out.contains("Please enter a name."));
        assert!(out.contains("Usage: open"));
        assert!(out.contains("Invalid input"));
        assert!(bank.is_empty());
    }

    #[test]
    fn test_current_account_interest_and_negative_amounts() {
        let mut bank = Bank::default();
        let out = run_script(
            &mut bank,
            "open current 0 Raj Kumar\nlogin 1\ninterest\ndeposit -5\nwithdraw abc\n",
        );

        assert!(out.contains("Welcome, Raj Kumar!"));
        assert!(out.contains("only available for savings accounts"));
        assert!(out.contains("Invalid amount"));
        assert!(out.contains("Usage: withdraw"));
        assert_eq!(bank.balance(1).unwrap(), dec!(0));
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut bank = Bank::default();
        run_script(&mut bank, "quit\nopen savings 1 Asha\n");
        assert!(bank.is_empty());
    }

    #[test]
    fn test_list_and_unknown_command() {
        let mut bank = Bank::default();
        let out = run_script(&mut bank, "list\nopen current 25 Priya\nlist\nfrobnicate\n");

        assert!(out.contains("No accounts found."));
        assert!(out.contains("Priya"));
        assert!(out.contains("₹25.00"));
        assert!(out.contains("Unknown command 'frobnicate'"));
    }
}
