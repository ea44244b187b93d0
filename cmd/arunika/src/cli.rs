//! Clap derive structures for the `arunika` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use domains::{AssetPatch, AssetType, ConfigPatch, CoursePatch, LessonPatch, LessonType, Mentor, Socials};

/// arunika -- manage and browse the Arunika course catalog
#[derive(Debug, Parser)]
#[command(
    name = "arunika",
    version,
    about = "Manage and browse the Arunika course catalog",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the public catalog
    Catalog,

    /// Show a course page
    Show {
        course_id: String,
        /// Lesson to open instead of the first one
        #[arg(long)]
        lesson: Option<String>,
    },

    /// Administrative commands (require credentials)
    Admin(AdminArgs),
}

#[derive(Debug, Args)]
pub struct AdminArgs {
    #[arg(long, env = "ARUNIKA_ADMIN_USER")]
    pub user: String,

    #[arg(long, env = "ARUNIKA_ADMIN_PASSWORD", hide_env_values = true)]
    pub password: String,

    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Update site branding
    Config(ConfigArgs),

    #[command(subcommand)]
    Course(CourseCommand),

    #[command(subcommand)]
    Lesson(LessonCommand),

    #[command(subcommand)]
    Asset(AssetCommand),

    /// Replace a course's mentor profile
    Mentor(MentorArgs),

    /// Print the stored document
    Export,

    /// Replace the stored document with the contents of a file
    Import { path: PathBuf },

    /// Overwrite storage with the seed catalog
    Reset,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[arg(long)]
    pub logo: Option<String>,
    #[arg(long)]
    pub brand_name: Option<String>,
    #[arg(long)]
    pub hero_title: Option<String>,
    #[arg(long)]
    pub hero_subtitle: Option<String>,
    #[arg(long)]
    pub supabase_url: Option<String>,
    #[arg(long)]
    pub supabase_key: Option<String>,
}

impl From<ConfigArgs> for ConfigPatch {
    fn from(args: ConfigArgs) -> Self {
        ConfigPatch {
            logo: args.logo,
            brand_name: args.brand_name,
            hero_title: args.hero_title,
            hero_subtitle: args.hero_subtitle,
            supabase_url: args.supabase_url,
            supabase_key: args.supabase_key,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CourseCommand {
    /// List every course, hidden ones included
    List,
    /// Add a placeholder course at the top of the catalog
    Add,
    Update {
        course_id: String,
        #[command(flatten)]
        fields: CourseFields,
    },
    Delete { course_id: String },
}

#[derive(Debug, Args)]
pub struct CourseFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub thumbnail: Option<String>,
    /// Show or hide the course in the public catalog
    #[arg(long)]
    pub public: Option<bool>,
}

impl From<CourseFields> for CoursePatch {
    fn from(f: CourseFields) -> Self {
        CoursePatch {
            title: f.title,
            description: f.description,
            thumbnail: f.thumbnail,
            is_public: f.public,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum LessonCommand {
    Add {
        course_id: String,
        /// video or text
        kind: LessonType,
    },
    Update {
        course_id: String,
        lesson_id: String,
        #[command(flatten)]
        fields: LessonFields,
    },
    Delete { course_id: String, lesson_id: String },
}

#[derive(Debug, Args)]
pub struct LessonFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long = "type")]
    pub kind: Option<LessonType>,
    #[arg(long)]
    pub video_url: Option<String>,
    #[arg(long)]
    pub content: Option<String>,
    /// Rich text (HTML)
    #[arg(long)]
    pub description: Option<String>,
}

impl From<LessonFields> for LessonPatch {
    fn from(f: LessonFields) -> Self {
        LessonPatch {
            title: f.title,
            kind: f.kind,
            video_url: f.video_url,
            content: f.content,
            description: f.description,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum AssetCommand {
    Add { course_id: String },
    Update {
        course_id: String,
        asset_id: String,
        #[command(flatten)]
        fields: AssetFields,
    },
    Delete { course_id: String, asset_id: String },
}

#[derive(Debug, Args)]
pub struct AssetFields {
    #[arg(long)]
    pub name: Option<String>,
    /// file or link
    #[arg(long = "type")]
    pub kind: Option<AssetType>,
    #[arg(long)]
    pub url: Option<String>,
}

impl From<AssetFields> for AssetPatch {
    fn from(f: AssetFields) -> Self {
        AssetPatch {
            name: f.name,
            kind: f.kind,
            url: f.url,
        }
    }
}

#[derive(Debug, Args)]
pub struct MentorArgs {
    pub course_id: String,
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub role: String,
    #[arg(long, default_value = "")]
    pub bio: String,
    #[arg(long, default_value = "")]
    pub photo: String,
    #[arg(long, default_value = "")]
    pub website: String,
    #[arg(long)]
    pub twitter: Option<String>,
    #[arg(long)]
    pub linkedin: Option<String>,
    #[arg(long)]
    pub instagram: Option<String>,
}

impl MentorArgs {
    pub fn into_parts(self) -> (String, Mentor) {
        let mentor = Mentor {
            name: self.name,
            role: self.role,
            bio: self.bio,
            photo: self.photo,
            website: self.website,
            socials: Socials {
                twitter: self.twitter,
                linkedin: self.linkedin,
                instagram: self.instagram,
            },
        };
        (self.course_id, mentor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_tree_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_lesson_add() {
        let cli = Cli::try_parse_from([
            "arunika", "admin", "--user", "u", "--password", "p", "lesson", "add", "course-1", "video",
        ])
        .unwrap();
        match cli.command {
            Command::Admin(AdminArgs {
                command: AdminCommand::Lesson(LessonCommand::Add { course_id, kind }),
                ..
            }) => {
                assert_eq!(course_id, "course-1");
                assert_eq!(kind, LessonType::Video);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
