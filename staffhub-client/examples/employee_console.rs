//! Interactive Employee Console Example
//!
//! Line-oriented console over the StaffHub client:
//! 1. Restores the previous session (if any) from the data directory
//! 2. Logs in / signs up / logs out
//! 3. Lists, searches, shows, creates, updates and deletes employees
//!
//! Run: cargo run --example employee_console
//!
//! Reads `STAFFHUB_GRAPHQL_URL`, `STAFFHUB_DATA_DIR` and
//! `STAFFHUB_TIMEOUT_SECS` (a `.env` file is honoured).

use std::io::{self, Write};

use futures::StreamExt;
use staffhub_client::models::{DEPARTMENTS, DESIGNATIONS, GENDERS};
use staffhub_client::{
    ClientConfig, ClientError, Employee, EmployeeFilter, EmployeeInput, EmployeeUpdate, StaffHub,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "staffhub_client=info".into()),
        )
        .init();

    let config = ClientConfig::from_env();
    let hub = StaffHub::connect(&config)?;

    println!("\nStaffHub Employee Console");
    println!("=========================");
    println!("Endpoint: {}", config.endpoint);
    print_help();

    // Session banner follows every login/logout
    let mut changes = hub.session().session_changes();
    tokio::spawn(async move {
        while let Some(session) = changes.next().await {
            match session {
                Some(user) => println!("[session] signed in as {}", user.username),
                None => println!("[session] signed out"),
            }
        }
    });

    while let Some(line) = read_line("> ") {
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            continue;
        };
        let args: Vec<&str> = parts.collect();

        let result = run_command(&hub, cmd, &args).await;
        match result {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => println!("Error: {}", e.user_message()),
        }
    }

    Ok(())
}

/// Returns `Ok(false)` to quit.
async fn run_command(hub: &StaffHub, cmd: &str, args: &[&str]) -> Result<bool, ClientError> {
    match (cmd, args) {
        ("help", _) => print_help(),
        ("quit" | "exit", _) => return Ok(false),
        ("login", [username]) => {
            let password = prompt("Password: ");
            let user = hub.session().login(username, &password).await?;
            println!("Welcome back, {}", user.username);
        }
        ("signup", [username, email]) => {
            let password = prompt("Password: ");
            let user = hub.session().signup(username, email, &password).await?;
            println!("Account created for {}", user.username);
        }
        ("logout", _) => hub.session().logout().await,
        ("whoami", _) => match hub.session().current_session() {
            Some(user) => println!("{} <{}> (id {})", user.username, user.email, user.id),
            None => println!("Not signed in"),
        },
        ("list", []) => {
            hub.session().require_user()?;
            print_table(&hub.employees().fetch_all().await?);
        }
        ("list", [department @ ..]) => {
            hub.session().require_user()?;
            let filter = EmployeeFilter::department(department.join(" "));
            print_table(&hub.employees().search(&filter).await?);
        }
        ("show", [id]) => {
            hub.session().require_user()?;
            let e = hub.employees().fetch_by_id(id).await?;
            println!("{:#?}", e);
        }
        ("add", []) => {
            hub.session().require_user()?;
            let input = EmployeeInput {
                first_name: prompt("First name: "),
                last_name: prompt("Last name: "),
                email: prompt("Email: "),
                gender: choose("Gender", GENDERS),
                designation: choose("Designation", DESIGNATIONS),
                salary: parse_salary(&prompt("Salary: "))?,
                date_of_joining: prompt("Date of joining (YYYY-MM-DD): "),
                department: choose("Department", DEPARTMENTS),
                employee_photo: Some(prompt("Photo URL (optional): ")).filter(|s| !s.is_empty()),
            };
            let created = hub.employees().create(&input).await?;
            println!("Created {} ({})", created.full_name(), created.id);
        }
        ("salary", [id, amount]) => {
            hub.session().require_user()?;
            let changes = EmployeeUpdate {
                salary: Some(parse_salary(amount)?),
                ..Default::default()
            };
            let updated = hub.employees().update(id, &changes).await?;
            println!("{} now earns {:.2}", updated.full_name(), updated.salary);
        }
        ("delete", [id]) => {
            hub.session().require_user()?;
            let confirm = prompt(&format!("Delete employee {}? [y/N] ", id));
            if confirm.eq_ignore_ascii_case("y") {
                let deleted = hub.employees().delete(id).await?;
                println!("{}", if deleted { "Deleted" } else { "Not deleted" });
            }
        }
        _ => println!("Unknown command, type 'help'"),
    }
    Ok(true)
}

fn parse_salary(raw: &str) -> Result<f64, ClientError> {
    match raw.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(ClientError::Validation(format!("'{}' is not a number", raw))),
    }
}

fn print_table(employees: &[Employee]) {
    if employees.is_empty() {
        println!("(no employees)");
        return;
    }
    println!(
        "{:<26} {:<24} {:<18} {:>12}",
        "ID", "Name", "Department", "Salary"
    );
    for e in employees {
        println!(
            "{:<26} {:<24} {:<18} {:>12.2}",
            e.id,
            e.full_name(),
            e.department,
            e.salary
        );
    }
}

fn print_help() {
    println!("\nCommands:");
    println!("  login <username>          sign in");
    println!("  signup <username> <email> create an account");
    println!("  logout | whoami");
    println!("  list [department]         list or search employees");
    println!("  show <id>                 employee details");
    println!("  add                       create an employee");
    println!("  salary <id> <amount>      update a salary");
    println!("  delete <id>               delete an employee");
    println!("  quit\n");
}

/// Pick from a numbered list; the typed text is kept if it is not a number.
fn choose(label: &str, options: &[&str]) -> String {
    for (i, option) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, option);
    }
    let answer = prompt(&format!("{}: ", label));
    match answer.parse::<usize>() {
        Ok(n) if (1..=options.len()).contains(&n) => options[n - 1].to_string(),
        _ => answer,
    }
}

fn prompt(label: &str) -> String {
    read_line(label).unwrap_or_default()
}

/// `None` on end of input.
fn read_line(label: &str) -> Option<String> {
    print!("{}", label);
    io::stdout().flush().ok();
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}
