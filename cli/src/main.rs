use std::env;
use std::io::{self, Write};

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use dotenv::dotenv;

use db::{establish_connection, run_migrations, seed_catalog, Devotion, Devotionable};

#[derive(Parser, Debug)]
#[command(version, about = "Operator tooling for the daily devotional site")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the scripture the daily rotation selects
    Today {
        /// Date to look up instead of the current UTC day (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Run migrations and load the starter catalog
    Seed,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    dotenv().ok();
    let url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let mut conn = establish_connection(&url);

    match cli.command {
        Command::Today { date } => {
            let date = date.unwrap_or_else(|| Utc::now().date_naive());
            match Devotion::scripture_for_date(date, &mut conn) {
                Ok(scripture) => {
                    io::stdout().write_fmt(format_args!(
                        "{} ({})\n{}\n",
                        scripture.reference(),
                        scripture.translation,
                        scripture.text
                    ))?;
                    Ok(())
                }
                Err(e) => io::stderr().write_fmt(format_args!("{}\n", e)),
            }
        }
        Command::Seed => {
            run_migrations(&mut conn).expect("Error running migrations");
            match seed_catalog(&mut conn) {
                Ok(count) => {
                    io::stdout().write_fmt(format_args!("Seeded {} scriptures\n", count))?;
                    Ok(())
                }
                Err(e) => io::stderr().write_fmt(format_args!("{}\n", e)),
            }
        }
    }
}
