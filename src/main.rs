use boxing_ring::adapters::random;
use boxing_ring::core::leaderboard;
use boxing_ring::utils::error::ErrorSeverity;
use boxing_ring::utils::{logger, validation::Validate};
use boxing_ring::{
    AppConfig, BoxerStore, CliConfig, Command, FightOutcome, InMemoryStore, JsonFileStore,
    NewBoxer, Result, Ring, RingError,
};
use clap::Parser;
use std::fs::File;

fn main() {
    let cli = CliConfig::parse();

    let mut config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    cli.apply_overrides(&mut config);

    if config.json_logging() {
        logger::init_json_logger(config.logging.verbose);
    } else {
        logger::init_cli_logger(config.logging.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置，memory backend 只接受 create
    let checked = config
        .validate()
        .and_then(|_| config.check_backend_for(cli.command.reads_catalog()));
    if let Err(e) = checked {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let outcome = if config.uses_json_store() {
        config
            .store_path()
            .and_then(JsonFileStore::open)
            .and_then(|store| run(store, &config, cli.command))
    } else {
        run(InMemoryStore::new(), &config, cli.command)
    };

    if let Err(e) = outcome {
        tracing::error!(
            "Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run<S: BoxerStore>(mut store: S, config: &AppConfig, command: Command) -> Result<()> {
    match command {
        Command::Create {
            name,
            weight,
            height,
            reach,
            age,
        } => {
            let boxer = store.create_boxer(NewBoxer {
                name,
                weight,
                height,
                reach,
                age,
            })?;
            println!(
                "✅ Created boxer {} (id {}, {})",
                boxer.name(),
                boxer.id(),
                boxer.weight_class()
            );
        }
        Command::Get { id, name } => {
            let boxer = match (id, name) {
                (Some(id), _) => store.get_boxer_by_id(id)?,
                (None, Some(name)) => store.get_boxer_by_name(&name)?,
                (None, None) => {
                    return Err(RingError::ConfigError {
                        message: "Either --id or --name is required".to_string(),
                    })
                }
            };
            println!("{}", serde_json::to_string_pretty(&boxer)?);
        }
        Command::Delete { id } => {
            store.delete_boxer(id)?;
            println!("✅ Deleted boxer {}", id);
        }
        Command::Record { id, result } => {
            let outcome: FightOutcome = result.parse()?;
            store.update_boxer_stats(id, outcome)?;
            println!("✅ Recorded {} for boxer {}", outcome, id);
        }
        Command::Leaderboard { sort_by, csv } => {
            let sort_by = match sort_by {
                Some(value) => value.parse()?,
                None => config.default_sort()?,
            };
            let entries = store.get_leaderboard(sort_by)?;
            match csv {
                Some(path) => {
                    leaderboard::write_csv(&entries, File::create(&path)?)?;
                    println!("📁 Leaderboard saved to: {}", path);
                }
                None => println!("{}", leaderboard::format_table(&entries)),
            }
        }
        Command::Fight { first, second } => {
            let boxer_1 = store.get_boxer_by_name(&first)?;
            let boxer_2 = store.get_boxer_by_name(&second)?;

            let mut ring = Ring::new(&mut store, random::from_seed(config.ring.seed));
            ring.enter_ring(boxer_1)?;
            ring.enter_ring(boxer_2)?;
            let winner = ring.fight()?;
            println!("🥊 {} wins!", winner);
        }
    }
    Ok(())
}
