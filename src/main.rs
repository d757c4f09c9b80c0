use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use orgdesk::client::ApiClient;
use orgdesk::models::{CompanyInput, Department};
use orgdesk::screens::{
    CompanyScreen, DeleteOutcome, DirectoryScreen, HomeScreen, LoadState, RankingScreen,
    SalariesScreen,
};
use orgdesk::views::CompanyLink;

#[derive(Parser)]
#[command(name = "orgdesk")]
#[command(about = "Admin client for the company/department/employee API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all companies
    Companies,
    /// Show a company with its departments and their employees
    Company {
        id: i64,
        /// Show only this department, with its roster re-fetched
        #[arg(long)]
        department: Option<String>,
    },
    /// Employee directory, grouped A-Z
    Employees,
    /// Salary ranking with top-3 earners
    Salaries,
    /// Department ranking by employee count
    Rankings,
    /// Create a company
    AddCompany { name: String, location: String },
    /// Delete a company (asks for confirmation unless --yes)
    DeleteCompany {
        id: i64,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "orgdesk=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let client = ApiClient::from_env();

    match cli.command {
        Commands::Companies => show_companies(&client).await,
        Commands::Company { id, department } => show_company(&client, id, department).await,
        Commands::Employees => show_directory(&client).await,
        Commands::Salaries => show_salaries(&client).await,
        Commands::Rankings => show_rankings(&client).await,
        Commands::AddCompany { name, location } => add_company(&client, name, location).await,
        Commands::DeleteCompany { id, yes } => delete_company(&client, id, yes).await,
    }
}

fn ensure_loaded(state: &LoadState) -> anyhow::Result<()> {
    if let LoadState::Error(e) = state {
        bail!("failed to load screen: {}", e);
    }
    Ok(())
}

fn link_label(link: CompanyLink<'_>) -> String {
    match link {
        CompanyLink::Found(company) => format!("{} (#{})", company.name, company.id),
        CompanyLink::Unknown(name) => format!("{} (unknown)", name),
        CompanyLink::None => "none".to_string(),
    }
}

async fn show_companies(client: &ApiClient) -> anyhow::Result<()> {
    let mut screen = HomeScreen::new();
    screen.load(client).await;
    ensure_loaded(screen.load_state())?;

    if screen.companies().is_empty() {
        println!("No companies yet.");
        return Ok(());
    }
    for company in screen.companies() {
        println!("#{:<4} {:<24} {}", company.id, company.name, company.location);
    }
    Ok(())
}

async fn show_company(
    client: &ApiClient,
    id: i64,
    department: Option<String>,
) -> anyhow::Result<()> {
    let mut screen = CompanyScreen::mount(client, id).await?;
    println!("{} - {}", screen.company().name, screen.company().location);

    if let Some(name) = department {
        let Some(dept) = screen
            .departments()
            .iter()
            .find(|d| d.name == name)
            .cloned()
        else {
            bail!("{} has no department named '{}'", screen.company().name, name);
        };
        screen.refresh_department(client, dept.id).await?;
        print_department(&screen, &dept);
        return Ok(());
    }

    if screen.departments().is_empty() {
        println!("  There are no departments yet.");
        return Ok(());
    }
    for dept in screen.departments().to_vec() {
        print_department(&screen, &dept);
    }
    Ok(())
}

fn print_department(screen: &CompanyScreen, dept: &Department) {
    println!("  {} (#{})", dept.name, dept.id);
    let employees = screen.employees_in(dept.id);
    if employees.is_empty() {
        println!("    no employees");
        return;
    }
    for emp in employees {
        println!(
            "    {:<24} ${:<10.0} {}",
            emp.name,
            emp.salary,
            if emp.manager { "manager" } else { "" }
        );
    }
}

async fn show_directory(client: &ApiClient) -> anyhow::Result<()> {
    let mut screen = DirectoryScreen::new();
    screen.load(client).await;
    ensure_loaded(screen.load_state())?;

    let grouped = screen.grouped();
    if grouped.is_empty() {
        println!("No employees found.");
        return Ok(());
    }
    for (initial, employees) in grouped {
        println!("{}", initial);
        for emp in employees {
            let occupations = screen.occupations_of(emp);
            let occupation = if occupations.is_empty() {
                "None: None".to_string()
            } else {
                occupations
                    .iter()
                    .map(|(company, depts)| format!("{}: {}", company.name, depts.join(", ")))
                    .collect::<Vec<_>>()
                    .join("; ")
            };
            println!(
                "  {:<24} ${:<12.2} {:<8} {}",
                emp.name,
                emp.salary,
                if emp.manager { "manager" } else { "" },
                occupation
            );
        }
    }
    Ok(())
}

async fn show_salaries(client: &ApiClient) -> anyhow::Result<()> {
    let mut screen = SalariesScreen::new();
    screen.load(client).await;
    ensure_loaded(screen.load_state())?;

    println!("Top 3 earners");
    if screen.top_three().is_empty() {
        println!("  No employees found.");
    }
    for emp in screen.top_three() {
        println!(
            "  {:<24} ${:<10.0} {}",
            emp.name,
            emp.salary,
            link_label(screen.employer_of(emp))
        );
    }

    println!("\nAll employees");
    for emp in screen.ranked() {
        println!(
            "  {:<24} ${:<10.0} {:<8} {}",
            emp.name,
            emp.salary,
            if emp.manager { "manager" } else { "" },
            link_label(screen.employer_of(emp))
        );
    }
    Ok(())
}

async fn show_rankings(client: &ApiClient) -> anyhow::Result<()> {
    let mut screen = RankingScreen::new();
    screen.load(client).await;
    ensure_loaded(screen.load_state())?;

    println!("Top 3 departments by employee count");
    if screen.top_three().is_empty() {
        println!("  No departments found.");
    }
    for group in screen.top_three() {
        println!(
            "  {:<24} {:<4} {}",
            group.department.name,
            group.employees.len(),
            link_label(screen.company_of(group))
        );
    }

    println!("\nAll departments");
    for group in screen.ranked() {
        println!(
            "  {:<24} {:<4} {}",
            group.department.name,
            group.employees.len(),
            link_label(screen.company_of(group))
        );
    }
    Ok(())
}

async fn add_company(client: &ApiClient, name: String, location: String) -> anyhow::Result<()> {
    let mut screen = HomeScreen::new();
    screen.load(client).await;
    ensure_loaded(screen.load_state())?;

    let company = screen
        .create_company(client, CompanyInput { name, location })
        .await?;
    println!("Created {} (#{})", company.name, company.id);
    Ok(())
}

async fn delete_company(client: &ApiClient, id: i64, yes: bool) -> anyhow::Result<()> {
    let mut screen = CompanyScreen::mount(client, id).await?;
    screen.request_delete_company();

    if !yes {
        if let Some(message) = screen.pending_confirmation() {
            println!("{}", message);
        }
        println!("Re-run with --yes to confirm.");
        screen.cancel_delete();
        return Ok(());
    }

    match screen.confirm_delete(client).await? {
        Some(DeleteOutcome::CompanyDeleted) => println!("Company deleted."),
        _ => println!("Nothing deleted."),
    }
    Ok(())
}
