//! BioTwin - Entry point
//!
//! CLI Usage:
//!   cargo run                                # Design pipeline, 3 cycles
//!   cargo run -- pipeline --cycles 5 --seed 42
//!   cargo run -- simulate --steps 40 --inject-at 5 --csv exports/run.csv

use std::path::PathBuf;

use anyhow::Result;
use biotwin::{
    export::{export_state_json_to, CsvExporter},
    Action, DesignPipeline, DosingSchedule, MockGenerator, MockStructurePredictor, Parameters,
    PipelineConfig, Simulation, StructurePredictor, TissueState,
};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "biotwin")]
#[command(about = "Liver fibrosis digital twin driven by generated hormokines", long_about = None)]
struct Cli {
    /// Directory holding treatment/progression/generator JSON parameters
    #[arg(long, global = true, value_name = "DIR")]
    params: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Design, inject and read cycles until fibrosis reverses
    Pipeline(PipelineArgs),
    /// Fixed-length run with a single scheduled dose
    Simulate(SimulateArgs),
}

#[derive(Args, Clone)]
struct DoseArgs {
    /// Target receptor
    #[arg(long, default_value = "TGFBR2")]
    receptor: String,

    /// INHIBIT or ACTIVATE (agonist/antagonist also accepted)
    #[arg(long, default_value = "INHIBIT")]
    action: Action,

    /// Initial fibrosis index
    #[arg(long, default_value_t = 0.9)]
    fibrosis: f64,

    /// RNG seed for reproducible candidates
    #[arg(long)]
    seed: Option<u64>,

    /// Artificial generator latency (ms)
    #[arg(long)]
    latency_ms: Option<u64>,

    /// Write final state and history as JSON
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,
}

#[derive(Args, Clone)]
struct PipelineArgs {
    #[command(flatten)]
    dose: DoseArgs,

    /// Maximum experimentation cycles
    #[arg(short = 'n', long, default_value_t = 3)]
    cycles: usize,

    /// Fibrosis index counted as successful reversal
    #[arg(long, default_value_t = 0.7)]
    success_threshold: f64,

    /// Skip mock structure prediction
    #[arg(long)]
    no_structure: bool,
}

#[derive(Args, Clone)]
struct SimulateArgs {
    #[command(flatten)]
    dose: DoseArgs,

    /// Number of steps to run
    #[arg(short = 'n', long, default_value_t = 40)]
    steps: usize,

    /// Step at which the dose is injected
    #[arg(long, default_value_t = 5)]
    inject_at: u64,

    /// Write the time series as CSV
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,
}

impl Default for PipelineArgs {
    fn default() -> Self {
        Self {
            dose: DoseArgs {
                receptor: "TGFBR2".to_string(),
                action: Action::Inhibit,
                fibrosis: 0.9,
                seed: None,
                latency_ms: None,
                json: None,
            },
            cycles: 3,
            success_threshold: 0.7,
            no_structure: false,
        }
    }
}

fn build_generator(params: &Parameters, dose: &DoseArgs) -> MockGenerator {
    let mut generator_params = params.generator.clone();
    if dose.seed.is_some() {
        generator_params.seed = dose.seed;
    }
    if let Some(latency) = dose.latency_ms {
        generator_params.latency_ms = latency;
    }
    MockGenerator::new(generator_params)
}

fn run_pipeline(params: &Parameters, args: PipelineArgs) -> Result<()> {
    println!("=== BioTwin - Design Pipeline ===\n");

    let mut simulation = Simulation::with_state(params, TissueState::with_fibrosis(args.dose.fibrosis));
    let initial = simulation.state().snapshot();
    println!(
        "Initial state: step={} fibrosis={:.4} viability={:.4}",
        initial.step, initial.fibrosis_index, initial.hepatocyte_viability
    );

    let mut generator = build_generator(params, &args.dose);
    let folding = MockStructurePredictor;
    let predictor = if args.no_structure {
        None
    } else {
        Some(&folding as &dyn StructurePredictor)
    };

    let pipeline = DesignPipeline::new(PipelineConfig {
        max_cycles: args.cycles,
        receptor: args.dose.receptor.clone(),
        action: args.dose.action,
        success_threshold: args.success_threshold,
    });
    let summary = pipeline.run(&mut generator, predictor, &mut simulation);

    for cycle in &summary.cycles {
        println!("\n--- Experimentation cycle {} ---", cycle.cycle);
        println!(
            "Candidate {}: {}... (affinity {:.2})",
            cycle.dose_id,
            &cycle.sequence[..cycle.sequence.len().min(10)],
            cycle.predicted_affinity
        );
        if let Some(structure) = &cycle.structure {
            println!(
                "Structure: pLDDT {:.1}, {:.1} kDa",
                structure.plddt_score, structure.molecular_weight_kda
            );
        }
        println!("Outcome: {:?}", cycle.outcome);
        if cycle.toxicity_penalty > 0.0 {
            println!("Toxicity penalty: -{:.4} viability", cycle.toxicity_penalty);
        }
        println!("Fibrosis index: {:.4}", cycle.snapshot.fibrosis_index);
    }

    println!();
    if summary.reversal_achieved {
        println!("✓ Significant fibrosis reversal observed");
    } else {
        println!("⚠️  No significant reversal after {} cycles", summary.cycles.len());
    }
    println!();
    simulation.diagnostics().print_summary();

    if let Some(path) = &args.dose.json {
        export_state_json_to(path, &simulation, Some(&summary))?;
        println!("\nState written to {}", path.display());
    }

    Ok(())
}

fn run_simulation(params: &Parameters, args: SimulateArgs) -> Result<()> {
    println!("=== BioTwin - Simulation ===\n");

    let mut simulation = Simulation::with_state(params, TissueState::with_fibrosis(args.dose.fibrosis));
    let mut generator = build_generator(params, &args.dose);
    let schedule = DosingSchedule {
        inject_at_step: args.inject_at,
        receptor: args.dose.receptor.clone(),
        action: args.dose.action,
    };

    let report_every = (args.steps / 10).max(1);
    for snapshot in simulation.run(args.steps, &schedule, &mut generator) {
        if snapshot.step as usize % report_every == 0 {
            println!(
                "  step={:4} fibrosis={:.4} stellate={:.4} viability={:.4} driver={:.4}",
                snapshot.step,
                snapshot.fibrosis_index,
                snapshot.stellate_activation,
                snapshot.hepatocyte_viability,
                snapshot.epigenetic_driver
            );
        }
    }

    for report in simulation.reports() {
        println!("\nDose {} at step {}: {:?}", report.dose_id, report.snapshot.step, report.outcome);
    }
    println!();
    simulation.diagnostics().print_summary();

    if let Some(path) = &args.csv {
        let mut exporter = CsvExporter::new(path)?;
        exporter.record_all(simulation.history())?;
        let path = exporter.finish()?;
        println!("\nTime series written to {}", path.display());
    }

    if let Some(path) = &args.dose.json {
        export_state_json_to(path, &simulation, None)?;
        println!("State written to {}", path.display());
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let params = match &cli.params {
        Some(dir) => Parameters::load_from_dir(dir),
        None => Parameters::load_or_default(),
    };

    match cli.command.unwrap_or_else(|| Command::Pipeline(PipelineArgs::default())) {
        Command::Pipeline(args) => run_pipeline(&params, args),
        Command::Simulate(args) => run_simulation(&params, args),
    }
}
