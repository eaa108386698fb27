//! Lean Agent - command-line entry point
//!
//! Interactive by default; `--file` analyses one file, `--demo` runs the
//! built-in examples.

use clap::Parser;
use lean_agent::agent::{AgentMode, AgentPipeline, ConversationState};
use lean_agent::config::{install_settings, settings, Settings};
use lean_agent::error::{sanitize_error_message, AgentError, AgentResult};
use lean_agent::observability::init_default_logging;
use lean_agent::tools::builtin::{WasteDetectorInput, WasteDetectorOutput, WASTE_DETECTOR};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, error, info};

const DEMO_DESCRIPTIONS: [&str; 3] = [
    "Our team has a manual approval process where team members wait for managers to review \
     documents, causing delays and requiring people to walk back and forth between desks.",
    "The automated pipeline runs smoothly with no bottlenecks.",
    "Workers have to manually fill out the same information on three different forms, and then \
     wait for each form to be processed separately.",
];

const RULE: &str = "------------------------------------------------------------";

/// Identify Lean waste (TIMWOODS) in process descriptions
#[derive(Parser)]
#[command(name = "lean-agent")]
#[command(about = "Lean Concepts Agent - identify waste in your processes")]
#[command(version)]
#[command(after_help = "Examples:
  lean-agent                     # Interactive mode
  lean-agent --file process.txt  # Analyze file
  lean-agent --demo              # Run demo examples")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", env = "LEAN_AGENT_CONFIG")]
    config: Option<PathBuf>,

    /// Analyze process description from a text file
    #[arg(short, long, value_name = "PATH", conflicts_with = "demo")]
    file: Option<PathBuf>,

    /// Run demo examples
    #[arg(short, long)]
    demo: bool,

    /// Route analyses through the planner/tool-router/finalizer pipeline
    #[arg(short, long)]
    agent: bool,

    /// Agent mode recorded in the conversation state
    #[arg(long, default_value = "optimizer")]
    mode: AgentMode,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// One analysis, with the conversation state when run through the pipeline
struct Report {
    output: WasteDetectorOutput,
    state: Option<ConversationState>,
}

struct Session {
    pipeline: AgentPipeline,
    use_agent: bool,
    mode: AgentMode,
    json: bool,
}

impl Session {
    fn analyze(&self, description: &str) -> AgentResult<Report> {
        if self.use_agent {
            let state = ConversationState::new(description).with_mode(self.mode);
            let state = self.pipeline.run_state(state)?;
            let output = match state.last_record() {
                Some(record) => serde_json::from_value(record.result.clone())
                    .map_err(|e| AgentError::internal_error(e.to_string()))?,
                None => {
                    return Err(AgentError::internal_error(
                        "pipeline finished without a tool result",
                    ))
                }
            };
            return Ok(Report {
                output,
                state: Some(state),
            });
        }

        let parameters = serde_json::to_value(WasteDetectorInput::new(description))
            .map_err(|e| AgentError::internal_error(e.to_string()))?;
        let result = self.pipeline.tools().execute_tool(WASTE_DETECTOR, &parameters)?;
        let output = serde_json::from_value(result)
            .map_err(|e| AgentError::internal_error(e.to_string()))?;

        Ok(Report {
            output,
            state: None,
        })
    }

    fn print(&self, report: &Report, out: &mut impl Write) -> AgentResult<()> {
        if self.json {
            let rendered = match &report.state {
                Some(state) => serde_json::to_string_pretty(state),
                None => serde_json::to_string_pretty(&report.output),
            }
            .map_err(|e| AgentError::internal_error(e.to_string()))?;
            writeln!(out, "{rendered}")?;
            return Ok(());
        }

        print_output(&report.output, out)?;
        if let Some(state) = &report.state {
            print_state(state, out)?;
        }
        Ok(())
    }

    fn analyze_and_print(&self, description: &str, out: &mut impl Write) -> AgentResult<()> {
        match self.analyze(description) {
            Ok(report) => self.print(&report, out),
            Err(e) => Ok(report_error(&e, out)?),
        }
    }
}

fn print_output(output: &WasteDetectorOutput, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Analysis Results:")?;
    writeln!(out, "Summary: {}\n", output.summary)?;

    if output.wastes.is_empty() {
        return writeln!(out, "No obvious wastes detected!");
    }

    writeln!(out, "Identified Wastes:")?;
    for (i, waste) in output.wastes.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, waste.category.title())?;
        writeln!(out, "     Evidence: {}", waste.supporting_evidence)?;
        writeln!(out, "     Recommendation: {}", waste.recommended_action)?;
        writeln!(out)?;
    }
    Ok(())
}

fn print_state(state: &ConversationState, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Agent Analysis:")?;
    writeln!(
        out,
        "Final Response: {}",
        state.final_response.as_deref().unwrap_or_default()
    )?;
    writeln!(out, "\nConversation History:")?;
    for record in &state.conversation_history {
        writeln!(out, "Tool: {}", record.tool)?;
        writeln!(out, "Result: {}", record.result)?;
        writeln!(out, "----------------------------------------")?;
    }
    Ok(())
}

/// Print an advisory message; user mistakes never abort the process
fn report_error(e: &AgentError, out: &mut impl Write) -> io::Result<()> {
    if e.is_user_error() {
        debug!(error = %e, "User-facing error");
    } else {
        error!(error = %e, "Analysis failed");
    }
    writeln!(out, "Error: {}", e.user_message())
}

fn interactive_mode(
    session: &Session,
    input: impl BufRead,
    out: &mut impl Write,
) -> AgentResult<()> {
    writeln!(out, "Lean Concepts Agent - Interactive Mode")?;
    writeln!(out, "==================================================")?;
    writeln!(
        out,
        "This tool helps identify wastes in your processes using TIMWOODS categories."
    )?;
    writeln!(out, "Enter 'quit' or 'exit' to stop.\n")?;

    let mut lines = input.lines();

    loop {
        write!(out, "Describe your process: ")?;
        out.flush()?;

        // A line that is not UTF-8 is consumed by the reader, so the next one is still readable
        let description = match lines.next() {
            None => break,
            Some(Ok(line)) => line,
            Some(Err(e)) if e.kind() == io::ErrorKind::InvalidData => {
                report_error(&AgentError::from(e), out)?;
                writeln!(out, "{RULE}")?;
                continue;
            }
            Some(Err(e)) => return Err(e.into()),
        };
        let description = description.trim();

        if description.is_empty() || matches!(description.to_lowercase().as_str(), "quit" | "exit")
        {
            break;
        }

        writeln!(out, "\nAnalyzing process...\n")?;
        session.analyze_and_print(description, out)?;
        writeln!(out, "{RULE}")?;
    }

    writeln!(out, "Thanks for using the Lean Concepts Agent!")?;
    Ok(())
}

fn analyze_file(session: &Session, path: &Path, out: &mut impl Write) -> AgentResult<()> {
    if !path.exists() {
        writeln!(out, "Error: File {} not found.", path.display())?;
        return Ok(());
    }

    let description = match std::fs::read_to_string(path) {
        Ok(content) => content.trim().to_string(),
        Err(e) => {
            writeln!(
                out,
                "Error processing file: {}",
                sanitize_error_message(&e.to_string())
            )?;
            return Ok(());
        }
    };

    if !session.json {
        writeln!(out, "Lean Concepts Agent - File Analysis")?;
        writeln!(out, "Analyzing: {}", path.display())?;
        writeln!(out, "{RULE}")?;
    }

    session.analyze_and_print(&description, out)
}

fn run_demo(session: &Session, out: &mut impl Write) -> AgentResult<()> {
    if !session.json {
        writeln!(out, "Lean Concepts Agent - WasteDetector Demo")?;
        writeln!(out, "==================================================")?;
    }

    for (i, description) in DEMO_DESCRIPTIONS.iter().enumerate() {
        if !session.json {
            writeln!(out, "\nExample {}:", i + 1)?;
            writeln!(out, "Process: {description}")?;
            writeln!(out, "{RULE}")?;
        }

        session.analyze_and_print(description, out)?;
    }
    Ok(())
}

fn run(cli: &Cli) -> AgentResult<()> {
    let settings = settings()?;
    let mut session = Session {
        pipeline: AgentPipeline::from_settings(settings)?,
        use_agent: cli.agent,
        mode: cli.mode,
        json: cli.json,
    };
    debug!(tools = ?session.pipeline.tools().list_tools(), "Tool system ready");

    let mut out = io::stdout().lock();
    let outcome = if let Some(path) = &cli.file {
        analyze_file(&session, path, &mut out)
    } else if cli.demo {
        run_demo(&session, &mut out)
    } else {
        interactive_mode(&session, io::stdin().lock(), &mut out)
    };

    let shutdown = session.pipeline.shutdown();
    outcome.and(shutdown)
}

fn main() {
    let cli = Cli::parse();

    init_default_logging(cli.verbose);

    info!("Starting Lean Concepts Agent v{}", env!("CARGO_PKG_VERSION"));

    let installed = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => install_settings(settings),
        Err(e) => {
            let e = AgentError::from(e);
            error!("Failed to load configuration: {}", e);
            eprintln!("Error: {}", e.user_message());
            process::exit(1);
        }
    };
    debug!(settings = ?installed, "Settings loaded");

    if let Err(e) = run(&cli) {
        error!("Command failed: {}", e);
        eprintln!("Error: {}", e.user_message());
        process::exit(1);
    }
}
