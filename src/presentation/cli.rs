//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --data, --config) are inherited by all subcommands
//! - Date arguments are optional and default to today in the handlers
//! - Add and update share one field struct per entity; on update an absent flag keeps the stored value

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::domain::value_objects::{
    DiseaseOutcome, Gender, MatingType, PaymentMethod, PenType, SheepSource, SheepStatus,
};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// flockbook - records for a single sheep farm
#[derive(Parser, Debug)]
#[command(name = "flockbook")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'flockbook' without arguments to see the dashboard.")]
pub struct Cli {
    /// Emit one JSON document on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Snapshot file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Config file to use instead of the user config
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stock, pen occupancy, sales total and pending lambings
    Dashboard,

    /// Farm details
    Farm {
        #[command(subcommand)]
        action: FarmCommand,
    },

    /// Sheep register
    Sheep {
        #[command(subcommand)]
        action: SheepCommand,
    },

    /// Pens and occupancy
    Pen {
        #[command(subcommand)]
        action: PenCommand,
    },

    /// Mating and lambing records
    Breeding {
        #[command(subcommand)]
        action: BreedingCommand,
    },

    /// Prevention and disease records
    Health {
        #[command(subcommand)]
        action: HealthCommand,
    },

    /// Feed stock and usage
    Feed {
        #[command(subcommand)]
        action: FeedCommand,
    },

    /// Sales
    Sale {
        #[command(subcommand)]
        action: SaleCommand,
    },

    /// Report dangling references and other data problems (read-only)
    Check,

    /// Write a dated JSON backup of the whole farm
    Export {
        /// Target directory (default: config storage.export_dir, else current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Delete all data and start again from the seed farm
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum FarmCommand {
    /// Show farm details
    Show,
    /// Change farm details; omitted fields keep their value
    Set(FarmFields),
}

#[derive(Args, Debug, Default, Clone)]
pub struct FarmFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub owner: Option<String>,
    #[arg(long)]
    pub contact: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub established: Option<NaiveDate>,
    #[arg(long)]
    pub notes: Option<String>,
}

/// Restrict the sheep list to one roster
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Roster {
    /// Female sheep
    Ewes,
    /// Male sheep
    Rams,
    /// Sheep still in a pen
    Saleable,
}

#[derive(Subcommand, Debug)]
pub enum SheepCommand {
    /// List sheep
    List {
        /// Match ear tag or breed (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long, value_enum)]
        status: Option<SheepStatus>,
        #[arg(long)]
        pen: Option<String>,
        #[arg(long, value_enum)]
        only: Option<Roster>,
    },
    /// Register a sheep
    Add {
        /// Ear tag
        id: String,
        #[command(flatten)]
        fields: SheepFields,
    },
    /// Change a sheep; omitted fields keep their value
    Update {
        /// Ear tag
        id: String,
        #[command(flatten)]
        fields: SheepFields,
    },
    /// Remove a sheep (its records are kept)
    Delete {
        /// Ear tag
        id: String,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct SheepFields {
    #[arg(long)]
    pub breed: Option<String>,
    #[arg(long, value_enum)]
    pub gender: Option<Gender>,
    /// YYYY-MM-DD (add: defaults to today)
    #[arg(long)]
    pub birth_date: Option<NaiveDate>,
    #[arg(long, value_enum)]
    pub status: Option<SheepStatus>,
    /// Pen code
    #[arg(long)]
    pub pen: Option<String>,
    #[arg(long, value_enum)]
    pub source: Option<SheepSource>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum PenCommand {
    /// List pens with occupancy
    List,
    /// Create a pen
    Add {
        /// Pen code (default: next free P### code)
        #[arg(long)]
        id: Option<String>,
        #[command(flatten)]
        fields: PenFields,
    },
    /// Change a pen; omitted fields keep their value
    Update {
        /// Pen code
        id: String,
        #[command(flatten)]
        fields: PenFields,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct PenFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long = "type", value_enum)]
    pub pen_type: Option<PenType>,
    #[arg(long)]
    pub capacity: Option<u32>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum BreedingCommand {
    /// List breeding records
    List {
        /// Only records still waiting for lambing
        #[arg(long)]
        pending: bool,
    },
    /// Record a mating
    Add {
        /// Ewe ear tag
        #[arg(long)]
        ewe: String,
        /// Ram ear tag
        #[arg(long)]
        ram: Option<String>,
        /// Mating date, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long = "type", value_enum)]
        mating_type: Option<MatingType>,
        /// Override the computed lambing date
        #[arg(long)]
        expected: Option<NaiveDate>,
        /// Actual lambing date
        #[arg(long)]
        lambed: Option<NaiveDate>,
        #[arg(long)]
        lambs: Option<u32>,
        #[arg(long)]
        survived: Option<u32>,
        #[arg(long)]
        notes: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum HealthCommand {
    /// Vaccinations, deworming and other preventive work
    Prevention {
        #[command(subcommand)]
        action: PreventionCommand,
    },
    /// Disease cases
    Disease {
        #[command(subcommand)]
        action: DiseaseCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum PreventionCommand {
    List {
        /// Only records for this ear tag
        #[arg(long)]
        sheep: Option<String>,
    },
    Add {
        #[arg(long)]
        sheep: String,
        /// What was done, e.g. a vaccine name
        #[arg(long)]
        project: String,
        /// YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// When it is due again
        #[arg(long)]
        next: Option<NaiveDate>,
        #[arg(long)]
        operator: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum DiseaseCommand {
    List {
        /// Only records for this ear tag
        #[arg(long)]
        sheep: Option<String>,
    },
    /// Record a case; outcome "died" marks the sheep deceased
    Add {
        #[arg(long)]
        sheep: String,
        #[arg(long)]
        disease: String,
        /// YYYY-MM-DD (default: today)
        #[arg(long)]
        onset: Option<NaiveDate>,
        #[arg(long)]
        symptoms: Option<String>,
        #[arg(long)]
        treatment: Option<String>,
        #[arg(long)]
        medicine: Option<String>,
        #[arg(long)]
        recovered_on: Option<NaiveDate>,
        #[arg(long, value_enum)]
        outcome: Option<DiseaseOutcome>,
        #[arg(long)]
        notes: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FeedCommand {
    /// List feed stock
    List,
    /// Record a feed delivery
    Add {
        #[arg(long)]
        name: String,
        /// Feed type (default: concentrate)
        #[arg(long = "type")]
        feed_type: Option<String>,
        #[arg(long)]
        quantity: f64,
        /// YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Record feed taken from stock
    Use {
        /// Feed record id
        id: String,
        #[arg(long)]
        quantity: f64,
        /// YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Who was fed (default: all sheep)
        #[arg(long)]
        target: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SaleCommand {
    /// List sales
    List,
    /// Record a sale; the sheep is marked sold
    Add {
        #[arg(long)]
        sheep: String,
        #[arg(long)]
        customer: Option<String>,
        #[arg(long)]
        quantity: Option<u32>,
        #[arg(long)]
        price: f64,
        /// Total amount (default: price x quantity)
        #[arg(long)]
        total: Option<f64>,
        #[arg(long, value_enum)]
        payment: Option<PaymentMethod>,
        /// YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        notes: Option<String>,
    },
}
