//! Command handlers. Learner commands only read; admin commands log in first
//! and commit through the session.

use std::fs;

use anyhow::{bail, Context};
use configs::Settings;
use secrecy::SecretString;
use services::CourseView;

use crate::cli::{AdminArgs, AdminCommand, AssetCommand, Command, CourseCommand, LessonCommand};
use crate::render;
use crate::Session;

pub fn dispatch(command: Command, session: &mut Session, settings: &Settings) -> anyhow::Result<()> {
    match command {
        Command::Catalog => {
            print!("{}", render::catalog(session.state()));
            Ok(())
        }
        Command::Show { course_id, lesson } => {
            let mut view = CourseView::new(course_id);
            if let Some(lesson_id) = lesson {
                view.select(lesson_id);
            }
            match render::course_page(session.state(), &view, &settings.site.base_url) {
                Some(page) => {
                    print!("{page}");
                    Ok(())
                }
                None => bail!("course '{}' not found", view.course_id()),
            }
        }
        Command::Admin(args) => admin(args, session),
    }
}

fn admin(args: AdminArgs, session: &mut Session) -> anyhow::Result<()> {
    let password = SecretString::from(args.password);
    if !session.login(&args.user, &password) {
        bail!("invalid admin credentials");
    }

    match args.command {
        AdminCommand::Config(fields) => {
            session.update_config(fields.into())?;
            println!("config updated");
        }
        AdminCommand::Course(cmd) => course(cmd, session)?,
        AdminCommand::Lesson(cmd) => lesson(cmd, session)?,
        AdminCommand::Asset(cmd) => asset(cmd, session)?,
        AdminCommand::Mentor(args) => {
            let (course_id, mentor) = args.into_parts();
            require_course(session, &course_id)?;
            session.update_mentor(&course_id, mentor)?;
            println!("mentor updated for {course_id}");
        }
        AdminCommand::Export => match session.export()? {
            Some(raw) => println!("{raw}"),
            None => bail!("nothing has been saved yet"),
        },
        AdminCommand::Import { path } => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            session.import(&raw)?;
            println!("imported {} courses", session.state().courses.len());
        }
        AdminCommand::Reset => {
            session.reset()?;
            println!("storage reset to the seed catalog");
        }
    }

    session.logout();
    Ok(())
}

fn course(cmd: CourseCommand, session: &mut Session) -> anyhow::Result<()> {
    match cmd {
        CourseCommand::List => print!("{}", render::course_table(session.state())),
        CourseCommand::Add => {
            let id = session.add_course()?;
            println!("{id}");
        }
        CourseCommand::Update { course_id, fields } => {
            require_course(session, &course_id)?;
            session.update_course(&course_id, fields.into())?;
            println!("course {course_id} updated");
        }
        CourseCommand::Delete { course_id } => {
            require_course(session, &course_id)?;
            session.delete_course(&course_id)?;
            println!("course {course_id} deleted");
        }
    }
    Ok(())
}

fn lesson(cmd: LessonCommand, session: &mut Session) -> anyhow::Result<()> {
    match cmd {
        LessonCommand::Add { course_id, kind } => match session.add_lesson(&course_id, kind)? {
            Some(id) => println!("{id}"),
            None => bail!("course '{course_id}' not found"),
        },
        LessonCommand::Update {
            course_id,
            lesson_id,
            fields,
        } => {
            require_lesson(session, &course_id, &lesson_id)?;
            session.update_lesson(&course_id, &lesson_id, fields.into())?;
            println!("lesson {lesson_id} updated");
        }
        LessonCommand::Delete {
            course_id,
            lesson_id,
        } => {
            require_lesson(session, &course_id, &lesson_id)?;
            session.delete_lesson(&course_id, &lesson_id)?;
            println!("lesson {lesson_id} deleted");
        }
    }
    Ok(())
}

fn asset(cmd: AssetCommand, session: &mut Session) -> anyhow::Result<()> {
    match cmd {
        AssetCommand::Add { course_id } => match session.add_asset(&course_id)? {
            Some(id) => println!("{id}"),
            None => bail!("course '{course_id}' not found"),
        },
        AssetCommand::Update {
            course_id,
            asset_id,
            fields,
        } => {
            require_asset(session, &course_id, &asset_id)?;
            session.update_asset(&course_id, &asset_id, fields.into())?;
            println!("asset {asset_id} updated");
        }
        AssetCommand::Delete {
            course_id,
            asset_id,
        } => {
            require_asset(session, &course_id, &asset_id)?;
            session.delete_asset(&course_id, &asset_id)?;
            println!("asset {asset_id} deleted");
        }
    }
    Ok(())
}

// The mutation API ignores unknown ids; the CLI reports them instead of
// printing a misleading success line.

fn require_course(session: &Session, course_id: &str) -> anyhow::Result<()> {
    if session.state().course(course_id).is_none() {
        bail!("course '{course_id}' not found");
    }
    Ok(())
}

fn require_lesson(session: &Session, course_id: &str, lesson_id: &str) -> anyhow::Result<()> {
    require_course(session, course_id)?;
    if session
        .state()
        .course(course_id)
        .and_then(|c| c.lesson(lesson_id))
        .is_none()
    {
        bail!("lesson '{lesson_id}' not found in {course_id}");
    }
    Ok(())
}

fn require_asset(session: &Session, course_id: &str, asset_id: &str) -> anyhow::Result<()> {
    require_course(session, course_id)?;
    if session
        .state()
        .course(course_id)
        .and_then(|c| c.asset(asset_id))
        .is_none()
    {
        bail!("asset '{asset_id}' not found in {course_id}");
    }
    Ok(())
}
