use clap::Parser;
use nota::application::{add_note, edit_note, list_notes, remove_note, search_notes, show_note};
use nota::cli::{format_note_detail, format_note_list, Cli, Commands};
use nota::error::NotaError;
use nota::infrastructure::{open_manager, Config};
use nota::{logging, web};
use std::path::Path;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), NotaError> {
    match cli.command {
        Commands::Add { title, content } => {
            let config = Config::load()?;
            let mut manager = open_manager(&config)?;
            let note = add_note(manager.as_mut(), &title, &content)?;
            println!("Created note {}  {}", note.short_id(), note.title);
            Ok(())
        }
        Commands::List => {
            let config = Config::load()?;
            let manager = open_manager(&config)?;
            print!("{}", format_note_list(&list_notes(manager.as_ref())));
            Ok(())
        }
        Commands::Show { id } => {
            let config = Config::load()?;
            let manager = open_manager(&config)?;
            let note = show_note(manager.as_ref(), &id)?;
            print!("{}", format_note_detail(&note));
            Ok(())
        }
        Commands::Edit { id, title, content } => {
            let config = Config::load()?;
            let mut manager = open_manager(&config)?;
            let note = edit_note(manager.as_mut(), &id, title.as_deref(), content.as_deref())?;
            println!("Updated note {}  {}", note.short_id(), note.title);
            Ok(())
        }
        Commands::Rm { id } => {
            let config = Config::load()?;
            let mut manager = open_manager(&config)?;
            let note = remove_note(manager.as_mut(), &id)?;
            println!("Deleted note {}  {}", note.short_id(), note.title);
            Ok(())
        }
        Commands::Search { query } => {
            let config = Config::load()?;
            let manager = open_manager(&config)?;
            print!("{}", format_note_list(&search_notes(manager.as_ref(), &query)));
            Ok(())
        }
        Commands::Serve { host, port } => {
            let config = Config::load()?;
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(web::serve(config, &host, port))
        }
        Commands::Config { key, value, list } => {
            if list {
                let config = Config::load()?;
                println!("storage = {}", config.storage);
                println!("db_path = {}", config.db_path.display());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    let mut config = Config::load_file_from_dir(Path::new("."))?;
                    config.set(&k, &v)?;
                    config.save_to_dir(Path::new("."))?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let config = Config::load()?;
                    println!("{}", config.get(&k)?);
                    Ok(())
                }
            } else {
                println!("Usage: nota config [--list | <key> [<value>]]");
                println!("Valid keys: storage, db_path");
                Ok(())
            }
        }
    }
}
