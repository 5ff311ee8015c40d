use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use monoscope::kernel::services::adapters::terminal::absolute_path;
use monoscope::kernel::services::adapters::{
    JsonMemento, LayeredSettings, LocalWorkspace, MemoryMemento, TerminalWindow,
};
use monoscope::kernel::services::ports::{HostResult, Memento};
use monoscope::kernel::CommandOutcome;
use monoscope::{Command, HostContext, MonoScope};

mod logging;

#[derive(Parser)]
#[command(name = "monoscope")]
#[command(about = "Quick open scoped to the Nx project of the current file", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Workspace folder (repeatable); defaults to the current directory
    #[arg(short, long = "workspace", global = true)]
    workspaces: Vec<PathBuf>,

    /// Also log to stderr at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a file from the project that owns FILE
    Open { file: PathBuf },
    /// Switch between project and workspace scope
    Toggle,
    /// Show the status line for FILE
    Status { file: Option<PathBuf> },
    /// Print the current scope mode
    Mode,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _logging = logging::init(cli.verbose);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("monoscope: failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("monoscope: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> HostResult<()> {
    let folders: Vec<PathBuf> = if cli.workspaces.is_empty() {
        vec![absolute_path(&PathBuf::from("."))]
    } else {
        cli.workspaces.iter().map(|p| absolute_path(p)).collect()
    };
    let primary = folders.first().cloned();

    let workspace = Arc::new(LocalWorkspace::new(folders));
    let window = Arc::new(TerminalWindow::new(workspace.clone()));
    let state: Arc<dyn Memento> = match primary.as_deref().map(JsonMemento::for_workspace) {
        Some(Ok(memento)) => Arc::new(memento),
        Some(Err(e)) => {
            tracing::warn!(error = %e, "workspace state not persisted");
            Arc::new(MemoryMemento::new())
        }
        None => Arc::new(MemoryMemento::new()),
    };
    let config = Arc::new(LayeredSettings::load(primary.as_deref()));

    let host = HostContext::new(workspace.clone(), workspace.clone(), window, state, config);
    let extension = MonoScope::activate(host);

    let result = match cli.command {
        Commands::Open { file } => {
            workspace.set_active_file(Some(absolute_path(&file)));
            extension.execute(&Command::Open).await.map(report)
        }
        Commands::Toggle => extension.execute(&Command::ToggleScope).await.map(report),
        Commands::Status { file } => {
            let file = file.map(|f| absolute_path(&f));
            extension.handle_active_editor_changed(file.as_deref());
            Ok(())
        }
        Commands::Mode => {
            println!("{}", extension.mode());
            Ok(())
        }
    };

    extension.deactivate();
    result
}

fn report(outcome: CommandOutcome) {
    tracing::debug!(?outcome, "command finished");
}
