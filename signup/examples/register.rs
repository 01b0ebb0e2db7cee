//! Registration Demo
//!
//! A line-oriented driver for the signup form: type the three field values,
//! the form validates on submit, and the first failing check's message is
//! shown. Repeats until the submission is valid. Logs to register.log.

use std::fs::File;
use std::io::{self, Write};

use log::LevelFilter;
use signup::{FieldName, SignupForm};
use simplelog::{Config, WriteLogger};

fn read_line(label: &str) -> io::Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
}

fn main() -> io::Result<()> {
    // Initialize file logging
    if let Ok(log_file) = File::create("register.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let form = SignupForm::new();
    form.watch(|| log::debug!("submission outcome changed"));

    loop {
        let prompts = [
            (FieldName::Email, "Email address"),
            (FieldName::Password, "Password"),
            (FieldName::PasswordConfirmation, "Confirm password"),
        ];
        for (name, label) in prompts {
            let Some(value) = read_line(label)? else {
                return Ok(());
            };
            form.set_field(name, value);
        }

        if form.submit().is_valid() {
            println!("Registered {}", form.values().email);
            return Ok(());
        }
        if let Some(message) = form.error_message() {
            println!("{message}");
        }
    }
}
