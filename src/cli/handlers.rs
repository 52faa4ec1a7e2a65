use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::lock::FileLock;
use crate::io::store::{self, Store};
use crate::model::list::TaskList;
use crate::ops::task_ops;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;

    match cli.command.expect("dispatch requires a subcommand") {
        // `dir` reads/writes config only; no tasks folder needed
        Commands::Dir(args) => cmd_dir(args, cli.tasks_dir.as_deref(), json),
        command => {
            let config = config_io::load_config();
            let dir = store::resolve_dir(cli.tasks_dir.as_deref(), &config);
            let store = Store::open(dir)?;

            match command {
                Commands::Lists => cmd_lists(&store, json),
                Commands::Show(args) => cmd_show(&store, args, json),
                Commands::Add(args) => cmd_add(&store, args, json),
                Commands::Toggle(args) => cmd_toggle(&store, args, json),
                Commands::Delete(args) => cmd_delete(&store, args),
                Commands::Mv(args) => cmd_mv(&store, args),
                Commands::New(args) => cmd_new(&store, args),
                Commands::Dir(_) => unreachable!("handled above"),
            }
        }
    }
}

fn load(store: &Store, name: &str) -> TaskList {
    store.load_list(&store.resolve(name))
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_lists(store: &Store, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let names: Vec<String> = store
        .list_files()
        .iter()
        .filter_map(|p| p.file_stem().and_then(|s| s.to_str()).map(String::from))
        .collect();

    if json {
        let out = ListsJson {
            dir: store.dir.display().to_string(),
            lists: names,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if names.is_empty() {
        println!("no checklists in {}", store.dir.display());
    } else {
        for name in names {
            println!("{}", name);
        }
    }
    Ok(())
}

fn cmd_show(store: &Store, args: ShowArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let list = load(store, &args.list);
    let (done, total) = list.progress();

    if json {
        let out = ListJson {
            list: list.name(),
            done,
            total,
            tasks: list
                .tasks
                .iter()
                .filter(|t| !args.pending || (t.is_task && !t.is_done))
                .map(task_json)
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{} — {}/{} done", list.name(), done, total);
    for task in &list.tasks {
        if args.pending && !(task.is_task && !task.is_done) {
            continue;
        }
        println!("{:>4}  {}", task.id, task.line);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(store: &Store, args: AddArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = FileLock::acquire_default(&store.dir)?;
    let mut list = load(store, &args.list);
    let id = task_ops::add_task(&mut list, &args.text);
    store.save_list(&list)?;

    if json {
        let task = list.find(id).expect("just added");
        println!("{}", serde_json::to_string_pretty(&task_json(task))?);
    } else {
        println!("added {} to {}", id, list.name());
    }
    Ok(())
}

fn cmd_toggle(
    store: &Store,
    args: ToggleArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = FileLock::acquire_default(&store.dir)?;
    let mut list = load(store, &args.list);
    let task = list
        .find_mut(args.id)
        .ok_or(task_ops::TaskError::NotFound(args.id))?;
    task_ops::toggle_task(task);
    let marker = if task.is_done { "[x]" } else { "[ ]" };
    let text = task.text();
    store.save_list(&list)?;

    if json {
        let task = list.find(args.id).expect("still present");
        println!("{}", serde_json::to_string_pretty(&task_json(task))?);
    } else {
        println!("{} {}", marker, text);
    }
    Ok(())
}

fn cmd_delete(store: &Store, args: DeleteArgs) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = FileLock::acquire_default(&store.dir)?;
    let mut list = load(store, &args.list);
    let removed = task_ops::delete_task(&mut list, args.id)?;
    store.save_list(&list)?;
    println!("deleted {}: {}", args.id, removed.text());
    Ok(())
}

fn cmd_mv(store: &Store, args: MvArgs) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = FileLock::acquire_default(&store.dir)?;
    let mut list = load(store, &args.list);
    task_ops::move_task(&mut list, args.id, args.position)?;
    store.save_list(&list)?;
    println!("moved to {}", args.position);
    Ok(())
}

fn cmd_new(store: &Store, args: NewArgs) -> Result<(), Box<dyn std::error::Error>> {
    let path = store.create_list(&args.name)?;
    println!("created {}", path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

fn cmd_dir(
    args: DirArgs,
    flag: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match args.path {
        Some(path) => {
            let config_path = config_io::config_path();
            let (_config, mut doc) = config_io::read_config_doc(&config_path)?;
            config_io::set_tasks_dir(&mut doc, &path);
            config_io::write_config(&config_path, &doc)?;
            println!("tasks folder set to {}", path);
        }
        None => {
            let config = config_io::load_config();
            let dir = store::resolve_dir(flag, &config);
            if json {
                let out = DirJson {
                    dir: dir.display().to_string(),
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", dir.display());
            }
        }
    }
    Ok(())
}
