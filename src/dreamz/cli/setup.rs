use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use dreamz::api::FormInput;
use dreamz::model::Tone;
use dreamz::vocabulary::VocabularyKind;

#[derive(Parser, Debug)]
#[command(name = "dreamz", version)]
#[command(about = "Command-line dream journal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub output: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a dream, or save the staged draft
    #[command(alias = "w")]
    Write {
        #[command(flatten)]
        form: FormArgs,
    },

    /// Edit a dream in place
    #[command(alias = "e")]
    Edit {
        /// Position of the dream (e.g. 3)
        position: String,

        #[command(flatten)]
        form: FormArgs,
    },

    /// Stage a dream for editing; the next `write` saves over it
    Stage {
        /// Position of the dream (e.g. 3)
        position: String,
    },

    /// List dreams, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Search term (title, text, meaning, tags, characters)
        #[arg(short, long)]
        search: Option<String>,

        /// Only dreams with this tone
        #[arg(long)]
        tone: Option<Tone>,

        /// Only dreams carrying this tag
        #[arg(long)]
        tag: Option<String>,
    },

    /// View one or more dreams
    #[command(alias = "v")]
    View {
        /// Positions of the dreams (e.g. 1 3 5-7)
        #[arg(required = true, num_args = 1..)]
        positions: Vec<String>,
    },

    /// Delete one or more dreams
    #[command(alias = "rm")]
    Delete {
        /// Positions of the dreams (e.g. 1 3 5-7)
        #[arg(required = true, num_args = 1..)]
        positions: Vec<String>,
    },

    /// Remove every dream and the staged draft
    Reset,

    /// Inspect or discard the staged draft
    #[command(subcommand)]
    Draft(DraftCommands),

    /// Manage selectable tags and characters
    #[command(subcommand)]
    Vocab(VocabCommands),

    /// Get or set configuration
    Config {
        /// Configuration key (date-format, log-level)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum DraftCommands {
    /// Show the staged draft
    Show,
    /// Discard the staged draft
    Discard,
}

#[derive(Subcommand, Debug)]
pub enum VocabCommands {
    /// List tags and characters
    #[command(alias = "ls")]
    List,
    /// Add a tag or character
    Add { kind: KindArg, item: String },
    /// Remove a user-added tag or character
    #[command(alias = "rm")]
    Remove { kind: KindArg, item: String },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum KindArg {
    Tag,
    Character,
}

impl From<KindArg> for VocabularyKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Tag => VocabularyKind::Tag,
            KindArg::Character => VocabularyKind::Character,
        }
    }
}

/// Form fields shared by `write` and `edit`.
#[derive(Args, Debug, Default)]
pub struct FormArgs {
    /// Title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Dream narrative
    #[arg(long)]
    pub text: Option<String>,

    /// Date of the dream (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    #[arg(long)]
    pub location: Option<String>,

    /// Toggle a tag (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Toggle a character (repeatable)
    #[arg(long = "character")]
    pub characters: Vec<String>,

    #[arg(long)]
    pub emotion_before: Option<String>,

    #[arg(long)]
    pub emotion_after: Option<String>,

    /// Intensity of the emotion before the dream (0-10)
    #[arg(long)]
    pub before_intensity: Option<i64>,

    /// Intensity of the emotion after waking (0-10)
    #[arg(long)]
    pub after_intensity: Option<i64>,

    /// How clearly the dream is remembered (0-10)
    #[arg(long)]
    pub clarity: Option<i64>,

    /// Sleep quality (0-10)
    #[arg(long)]
    pub sleep_quality: Option<i64>,

    /// What the dream might mean
    #[arg(long)]
    pub meaning: Option<String>,

    /// positive, negative or neutral
    #[arg(long)]
    pub tone: Option<Tone>,
}

impl From<FormArgs> for FormInput {
    fn from(args: FormArgs) -> Self {
        FormInput {
            title: args.title,
            body_text: args.text,
            date: args.date,
            location: args.location,
            tags: args.tags,
            characters: args.characters,
            emotion_before: args.emotion_before,
            emotion_after: args.emotion_after,
            emotion_before_intensity: args.before_intensity,
            emotion_after_intensity: args.after_intensity,
            clarity: args.clarity,
            sleep_quality: args.sleep_quality,
            meaning: args.meaning,
            tone: args.tone,
        }
    }
}
