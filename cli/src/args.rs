//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use neudev::Id;
use neudev::config::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS};
use neudev::types::{ItemScope, Role};

#[derive(Parser, Debug)]
#[command(name = "neudev", about = "NEUDev classroom API CLI")]
pub struct Cli {
    #[arg(long, env = "NEUDEV_API_URL")]
    pub base_url: String,

    #[arg(long, env = "NEUDEV_SESSION_FILE", default_value = ".neudev-session.json")]
    pub session_file: PathBuf,

    #[arg(long, env = "NEUDEV_REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,

    #[arg(long, env = "NEUDEV_CONNECT_TIMEOUT_SECS", default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS)]
    pub connect_timeout_secs: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a teacher or student account.
    Register(RegisterCommand),
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "NEUDEV_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Logout,
    /// Refresh and print the stored identity.
    Whoami,
    Profile(ProfileCommand),
    Class(ClassCommand),
    Bulletin(BulletinCommand),
    /// Raise a concern about a class.
    Concern {
        class_id: Id,
        #[arg(long)]
        text: String,
    },
    Activity(ActivityCommand),
    Item(ItemCommand),
}

// =============================================================================
// ACCOUNT
// =============================================================================

#[derive(Args, Debug)]
pub struct RegisterCommand {
    #[command(subcommand)]
    pub command: RegisterSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RegisterSubcommand {
    Teacher(SignupArgs),
    Student {
        #[command(flatten)]
        signup: SignupArgs,
        #[arg(long)]
        student_num: String,
        #[arg(long)]
        program: String,
    },
}

#[derive(Args, Debug)]
pub struct SignupArgs {
    #[arg(long)]
    pub firstname: String,
    #[arg(long)]
    pub lastname: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "NEUDEV_PASSWORD", hide_env_values = true)]
    pub password: String,
    /// Defaults to `--password`.
    #[arg(long)]
    pub confirm_password: Option<String>,
}

#[derive(Args, Debug)]
pub struct ProfileCommand {
    #[command(subcommand)]
    pub command: ProfileSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ProfileSubcommand {
    Show,
    Update(ProfileUpdateArgs),
    /// Delete the account and forget the session.
    Delete,
}

#[derive(Args, Debug, Default)]
pub struct ProfileUpdateArgs {
    #[arg(long)]
    pub firstname: Option<String>,
    #[arg(long)]
    pub lastname: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub student_num: Option<String>,
    #[arg(long)]
    pub program: Option<String>,
    #[arg(long)]
    pub new_password: Option<String>,
    #[arg(long)]
    pub profile_image: Option<PathBuf>,
    #[arg(long)]
    pub cover_image: Option<PathBuf>,
}

// =============================================================================
// CLASSES & BULLETINS
// =============================================================================

#[derive(Args, Debug)]
pub struct ClassCommand {
    #[command(subcommand)]
    pub command: ClassSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ClassSubcommand {
    /// Enrolled classes for students, owned classes for teachers.
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        section: String,
    },
    Update {
        class_id: Id,
        #[arg(long)]
        name: String,
        #[arg(long)]
        section: String,
    },
    Delete {
        class_id: Id,
    },
    Info {
        class_id: Id,
    },
    Students {
        class_id: Id,
    },
    Join {
        class_id: Id,
    },
    Leave {
        class_id: Id,
    },
    /// Remove a student from a class you teach.
    Kick {
        class_id: Id,
        student_id: Id,
    },
    Activities {
        class_id: Id,
    },
}

#[derive(Args, Debug)]
pub struct BulletinCommand {
    #[command(subcommand)]
    pub command: BulletinSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BulletinSubcommand {
    List {
        class_id: Id,
    },
    Post {
        class_id: Id,
        #[arg(long)]
        title: String,
        #[arg(long)]
        message: String,
    },
    Delete {
        post_id: Id,
    },
}

// =============================================================================
// ACTIVITIES & ITEMS
// =============================================================================

#[derive(Args, Debug)]
pub struct ActivityCommand {
    #[command(subcommand)]
    pub command: ActivitySubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ActivitySubcommand {
    /// The logged-in student's activities.
    List,
    Create {
        #[arg(long, help = "JSON body, or @path to a JSON file")]
        data: String,
    },
    Edit {
        act_id: Id,
        #[arg(long, help = "JSON body, or @path to a JSON file")]
        data: String,
    },
    Delete {
        act_id: Id,
    },
    Show {
        act_id: Id,
    },
    Items {
        act_id: Id,
        /// View to request; defaults to the session role.
        #[arg(long = "as")]
        role: Option<Role>,
    },
    Leaderboard {
        act_id: Id,
        #[arg(long = "as")]
        role: Option<Role>,
    },
    Settings {
        act_id: Id,
    },
    UpdateSettings {
        act_id: Id,
        #[arg(long, help = "JSON body, or @path to a JSON file")]
        data: String,
    },
}

#[derive(Args, Debug)]
pub struct ItemCommand {
    #[command(subcommand)]
    pub command: ItemSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ItemSubcommand {
    Types,
    List {
        item_type_id: Id,
        #[arg(long)]
        scope: Option<ItemScope>,
        #[arg(long)]
        teacher_id: Option<Id>,
    },
    Show {
        item_id: Id,
    },
    Create {
        #[arg(long, help = "JSON body, or @path to a JSON file")]
        data: String,
    },
    Update {
        item_id: Id,
        #[arg(long, help = "JSON body, or @path to a JSON file")]
        data: String,
    },
    Delete {
        item_id: Id,
    },
    Languages,
}

#[cfg(test)]
#[path = "args_test.rs"]
mod tests;
