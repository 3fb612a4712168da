use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use tracing::{info, Level};

use ferrite_mlp::data::{csv::LabelMode, load_csv, toy};
use ferrite_mlp::{accuracy, train_network, ActivationFunction, Dataset, Network, NetworkSpec, TrainConfig};

#[derive(Parser)]
#[command(name = "ferrite-mlp", version, about = "Train and score a three-layer perceptron")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Train a network on a dataset and report its accuracy
    Train(TrainArgs),
    /// Write a default run configuration file
    InitConfig {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}

#[derive(Args)]
struct TrainArgs {
    /// CSV file with one record per row
    #[arg(long, value_name = "PATH", required_unless_present = "builtin", conflicts_with = "builtin")]
    data: Option<PathBuf>,
    /// Use a built-in toy dataset instead of a CSV file
    #[arg(long, value_enum)]
    builtin: Option<Builtin>,
    /// Last CSV column is a class index in [0, N)
    #[arg(long, value_name = "N", conflicts_with = "targets")]
    classes: Option<usize>,
    /// Last N CSV columns are the target vector
    #[arg(long, value_name = "N")]
    targets: Option<usize>,
    /// Held-out CSV file scored after training (same label columns as --data)
    #[arg(long, value_name = "PATH")]
    test: Option<PathBuf>,
    /// JSON run configuration; the flags below override it
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    #[arg(long, value_name = "INT")]
    hidden: Option<usize>,
    #[arg(long)]
    activation: Option<ActivationFunction>,
    #[arg(long, value_name = "FLOAT")]
    learning_rate: Option<f64>,
    #[arg(long, value_name = "INT")]
    epochs: Option<usize>,
    /// Seed for the initial weights
    #[arg(long, value_name = "INT")]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Builtin {
    Xor,
    Blobs,
}

/// Everything a training run needs besides the data.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RunFile {
    #[serde(default)]
    network: NetworkSpec,
    #[serde(default)]
    train: TrainConfig,
}

impl RunFile {
    fn load(path: &Path) -> Result<RunFile> {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing run configuration {}", path.display()))
    }

    fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)
            .with_context(|| format!("writing {}", path.display()))
    }
}

impl TrainArgs {
    fn apply(&self, run: &mut RunFile) {
        if let Some(hidden) = self.hidden {
            run.network.hidden_count = hidden;
        }
        if let Some(activation) = self.activation {
            run.network.activation = activation;
        }
        if let Some(seed) = self.seed {
            run.network.seed = seed;
        }
        if let Some(lr) = self.learning_rate {
            run.train.learning_rate = lr;
        }
        if let Some(epochs) = self.epochs {
            run.train.epochs = epochs;
        }
    }

    fn label_mode(&self) -> Result<LabelMode> {
        match (self.classes, self.targets) {
            (Some(n_classes), _) => Ok(LabelMode::ClassIndex { n_classes }),
            (None, Some(n_targets)) => Ok(LabelMode::Targets { n_targets }),
            (None, None) => bail!("CSV data needs either --classes or --targets"),
        }
    }

    fn training_set(&self) -> Result<Dataset> {
        match (&self.data, self.builtin) {
            (Some(path), _) => load_csv(path, self.label_mode()?)
                .with_context(|| format!("loading {}", path.display())),
            (None, Some(Builtin::Xor)) => Ok(toy::xor()),
            (None, Some(Builtin::Blobs)) => Ok(toy::blobs(200)),
            (None, None) => bail!("either --data or --builtin is required"),
        }
    }
}

fn install_logger(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("installing logger")
}

fn run_train(args: TrainArgs) -> Result<()> {
    let mut run = match &args.config {
        Some(path) => RunFile::load(path)?,
        None => RunFile::default(),
    };
    args.apply(&mut run);

    let train_set = args.training_set()?;
    let input_count = train_set.attribute_count().context("training set is empty")?;
    let output_count = train_set.target_count().context("training set is empty")?;

    let (hidden_weights, output_weights) = run.network.initial_weights(input_count, output_count);
    let mut network = Network::with_activation(
        &train_set,
        run.network.hidden_count,
        &hidden_weights,
        &output_weights,
        run.network.activation,
    )?;

    info!(
        records = train_set.len(),
        learning_rate = run.train.learning_rate,
        epochs = run.train.epochs,
        "training"
    );
    train_network(&mut network, &train_set, &run.train)?;

    let train_acc = accuracy(&mut network, &train_set)?;
    println!("train accuracy: {:.2}% ({} records)", train_acc * 100.0, train_set.len());

    if let Some(path) = &args.test {
        let test_set = load_csv(path, args.label_mode()?)
            .with_context(|| format!("loading {}", path.display()))?;
        let test_acc = accuracy(&mut network, &test_set)?;
        println!("test accuracy:  {:.2}% ({} records)", test_acc * 100.0, test_set.len());
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    install_logger(cli.verbose)?;

    match cli.command {
        Command::Train(args) => run_train(args),
        Command::InitConfig { path } => {
            RunFile::default().save(&path)?;
            info!(path = %path.display(), "wrote default run configuration");
            Ok(())
        }
    }
}
