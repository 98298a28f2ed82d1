use clap::Parser;
use moodiary::application::{
    delete_entry, init, list_entries, show_entry, CreateEntryService, EditEntryService,
    HomeService, SettingsService,
};
use moodiary::cli::{output, Cli, Commands};
use moodiary::domain::emotions;
use moodiary::error::MoodiaryError;
use moodiary::infrastructure::{DiaryRepository, EditorSession, JsonEntryStore};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MoodiaryError> {
    match cli.command {
        Some(Commands::Init { path, city }) => init::init(&path, city),
        Some(Commands::New { emotion, content }) => {
            let repo = DiaryRepository::discover()?;
            let store = JsonEntryStore::new(repo);

            // Check the selection before opening an editor session
            moodiary::application::create_entry::validate_emotion(emotion)?;

            let content = match content {
                Some(text) => text,
                None => EditorSession::from_env().compose("")?,
            };

            let entry = CreateEntryService::new(store).execute(emotion, &content)?;
            println!("Saved diary entry {} for {}", entry.id, entry.date);
            Ok(())
        }
        Some(Commands::List { limit }) => {
            let repo = DiaryRepository::discover()?;
            let store = JsonEntryStore::new(repo);
            let entries = list_entries(&store, limit)?;
            print!("{}", output::format_entry_list(&entries));
            Ok(())
        }
        Some(Commands::Show { id }) => {
            let repo = DiaryRepository::discover()?;
            let store = JsonEntryStore::new(repo);
            let entry = show_entry(&store, &id)?;
            print!("{}", output::format_entry(&entry));
            Ok(())
        }
        Some(Commands::Edit {
            id,
            emotion,
            content,
        }) => {
            let repo = DiaryRepository::discover()?;
            let store = JsonEntryStore::new(repo);

            let content = match content {
                Some(text) => text,
                None => {
                    let current = show_entry(&store, &id)?;
                    EditorSession::from_env().compose(&current.content)?
                }
            };

            let entry = EditEntryService::new(store).execute(&id, emotion, &content)?;
            println!("Updated diary entry {}", entry.id);
            Ok(())
        }
        Some(Commands::Delete { id }) => {
            let repo = DiaryRepository::discover()?;
            let store = JsonEntryStore::new(repo);
            delete_entry(&store, &id)?;
            println!("Deleted diary entry {}", id);
            Ok(())
        }
        Some(Commands::Emotions) => {
            print!("{}", output::format_emotion_catalog(emotions()));
            Ok(())
        }
        Some(Commands::Home { refresh, city }) => {
            let repo = DiaryRepository::discover()?;
            let view = HomeService::new(repo).execute(city.as_deref(), refresh)?;
            print!("{}", output::format_home(&view));
            Ok(())
        }
        Some(Commands::Weather { city, refresh }) => {
            let repo = DiaryRepository::discover()?;
            let (reading, notice) = HomeService::new(repo).weather(city.as_deref(), refresh);
            print!("{}", output::format_weather(&reading));
            if let Some(notice) = notice {
                println!("Note: {}", notice);
            }
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = DiaryRepository::discover()?;
            let service = SettingsService::new(repo);

            if list {
                let (config, interval) = service.list()?;
                println!("city = {}", config.city);
                println!("refresh-interval = {}", interval);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: moodiary config [--list | <key> [<value>]]");
                println!("Valid keys: refresh-interval, city, created");
                Ok(())
            }
        }
        None => {
            println!("moodiary - Command-line mood diary");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
