//! Command dispatch. Each arm maps one subcommand onto one client call and
//! renders its result as JSON.

use neudev::types::{
    ActivityDraft, ActivitySettings, ItemDraft, ItemQuery, NewClass, NewConcern, ProfileUpdate, Registration,
    StudentSignup, TeacherSignup,
};
use neudev::{ApiError, ClientConfig, FileStore, MissingCredential, NeuDevClient, Role, Session, SessionStore, Timeouts};
use serde::Serialize;
use serde_json::Value;

use crate::CliError;
use crate::args::{
    ActivitySubcommand, BulletinSubcommand, ClassSubcommand, Cli, Command, ItemSubcommand, ProfileSubcommand,
    ProfileUpdateArgs, RegisterSubcommand, SignupArgs,
};
use crate::input;

struct CliContext {
    client: NeuDevClient,
    store: FileStore,
}

impl CliContext {
    /// The stored session, or an empty one so the client reports the missing
    /// credential itself.
    fn session(&self) -> Result<Session, CliError> {
        Ok(self.store.load()?.unwrap_or_else(anonymous))
    }
}

fn anonymous() -> Session {
    Session::new("", None, None)
}

fn to_json(value: impl Serialize) -> Result<Value, CliError> {
    Ok(serde_json::to_value(value)?)
}

pub async fn run(cli: Cli) -> Result<Value, CliError> {
    let timeouts = Timeouts { request_secs: cli.request_timeout_secs, connect_secs: cli.connect_timeout_secs };
    let config = ClientConfig::new(&cli.base_url)?.with_timeouts(timeouts);
    let ctx = CliContext { client: NeuDevClient::new(&config)?, store: FileStore::new(cli.session_file) };

    match cli.command {
        Command::Register(register) => run_register(&ctx, register.command).await,
        Command::Login { email, password } => {
            let (login, session) = ctx.client.login(&email, &password).await?;
            ctx.store.save(&session)?;
            to_json(login)
        }
        Command::Logout => {
            let mut slot = ctx.store.load()?;
            let message = ctx.client.logout(&mut slot).await?;
            ctx.store.sync(slot.as_ref())?;
            to_json(message)
        }
        Command::Whoami => {
            let mut session = ctx.session()?;
            let info = ctx.client.user_info(&mut session).await;
            // A refreshed role survives an incomplete reply.
            if session.has_access_token() {
                ctx.store.save(&session)?;
            }
            to_json(info?)
        }
        Command::Profile(profile) => run_profile(&ctx, profile.command).await,
        Command::Class(class) => run_class(&ctx, class.command).await,
        Command::Bulletin(bulletin) => run_bulletin(&ctx, bulletin.command).await,
        Command::Concern { class_id, text } => {
            let session = ctx.session()?;
            to_json(ctx.client.create_concern(&concern_from(&session, class_id, text)).await?)
        }
        Command::Activity(activity) => run_activity(&ctx, activity.command).await,
        Command::Item(item) => run_item(&ctx, item.command).await,
    }
}

async fn run_register(ctx: &CliContext, command: RegisterSubcommand) -> Result<Value, CliError> {
    let (registration, confirm) = registration_from(command);
    to_json(ctx.client.register(&registration, &confirm).await?)
}

fn registration_from(command: RegisterSubcommand) -> (Registration, String) {
    match command {
        RegisterSubcommand::Teacher(signup) => {
            let confirm = confirmation(&signup);
            let SignupArgs { firstname, lastname, email, password, .. } = signup;
            (Registration::Teacher(TeacherSignup { firstname, lastname, email, password }), confirm)
        }
        RegisterSubcommand::Student { signup, student_num, program } => {
            let confirm = confirmation(&signup);
            let SignupArgs { firstname, lastname, email, password, .. } = signup;
            let student = StudentSignup { firstname, lastname, email, password, student_num, program };
            (Registration::Student(student), confirm)
        }
    }
}

fn confirmation(signup: &SignupArgs) -> String {
    signup.confirm_password.clone().unwrap_or_else(|| signup.password.clone())
}

/// The concern is attributed to whichever id the session role carries.
fn concern_from(session: &Session, class_id: neudev::Id, text: String) -> NewConcern {
    let (student_id, teacher_id) = match session.role() {
        Some(Role::Student) => (session.user_id, None),
        Some(Role::Teacher) => (None, session.user_id),
        None => (None, None),
    };
    NewConcern { class_id, student_id, teacher_id, concern: text }
}

async fn run_profile(ctx: &CliContext, command: ProfileSubcommand) -> Result<Value, CliError> {
    match command {
        ProfileSubcommand::Show => {
            let mut session = ctx.session()?;
            let profile = ctx.client.profile(&mut session).await?;
            ctx.store.save(&session)?;
            to_json(profile)
        }
        ProfileSubcommand::Update(args) => {
            let session = ctx.session()?;
            let update = profile_update_from(args)?;
            to_json(ctx.client.update_profile(&session, update).await?)
        }
        ProfileSubcommand::Delete => {
            let mut slot = ctx.store.load()?;
            let message = ctx.client.delete_profile(&mut slot).await?;
            ctx.store.sync(slot.as_ref())?;
            to_json(message)
        }
    }
}

fn profile_update_from(args: ProfileUpdateArgs) -> Result<ProfileUpdate, CliError> {
    Ok(ProfileUpdate {
        firstname: args.firstname,
        lastname: args.lastname,
        email: args.email,
        student_num: args.student_num,
        program: args.program,
        new_password: args.new_password,
        profile_image: args.profile_image.as_deref().map(input::image_file).transpose()?,
        cover_image: args.cover_image.as_deref().map(input::image_file).transpose()?,
    })
}

async fn run_class(ctx: &CliContext, command: ClassSubcommand) -> Result<Value, CliError> {
    let session = ctx.session()?;
    let client = &ctx.client;
    match command {
        ClassSubcommand::List => match session.role() {
            Some(Role::Student) => to_json(client.student_classes(&session).await?),
            Some(Role::Teacher) => to_json(client.classes(&session).await?),
            None => Err(ApiError::Unauthorized(MissingCredential::Identity).into()),
        },
        ClassSubcommand::Create { name, section } => {
            to_json(client.create_class(&session, &NewClass::new(&name, &section)).await?)
        }
        ClassSubcommand::Update { class_id, name, section } => {
            to_json(client.update_class(&session, class_id, &NewClass::new(&name, &section)).await?)
        }
        ClassSubcommand::Delete { class_id } => to_json(client.delete_class(&session, class_id).await?),
        ClassSubcommand::Info { class_id } => to_json(client.class_info(&session, class_id).await?),
        ClassSubcommand::Students { class_id } => to_json(client.class_students(&session, class_id).await?),
        ClassSubcommand::Join { class_id } => to_json(client.enroll_in_class(&session, class_id).await?),
        ClassSubcommand::Leave { class_id } => to_json(client.unenroll_from_class(&session, class_id).await?),
        ClassSubcommand::Kick { class_id, student_id } => {
            to_json(client.unenroll_student(&session, class_id, student_id).await?)
        }
        ClassSubcommand::Activities { class_id } => to_json(client.class_activities(&session, class_id).await?),
    }
}

async fn run_bulletin(ctx: &CliContext, command: BulletinSubcommand) -> Result<Value, CliError> {
    let session = ctx.session()?;
    let client = &ctx.client;
    match command {
        BulletinSubcommand::List { class_id } => to_json(client.bulletin_posts(&session, class_id).await?),
        BulletinSubcommand::Post { class_id, title, message } => {
            to_json(client.create_bulletin_post(&session, class_id, &title, &message).await?)
        }
        BulletinSubcommand::Delete { post_id } => to_json(client.delete_bulletin_post(&session, post_id).await?),
    }
}

async fn run_activity(ctx: &CliContext, command: ActivitySubcommand) -> Result<Value, CliError> {
    let session = ctx.session()?;
    let client = &ctx.client;
    match command {
        ActivitySubcommand::List => to_json(client.student_activities(&session).await?),
        ActivitySubcommand::Create { data } => {
            let draft: ActivityDraft = input::json_arg(&data)?;
            to_json(client.create_activity(&session, &draft).await?)
        }
        ActivitySubcommand::Edit { act_id, data } => {
            let draft: ActivityDraft = input::json_arg(&data)?;
            to_json(client.edit_activity(&session, act_id, &draft).await?)
        }
        ActivitySubcommand::Delete { act_id } => to_json(client.delete_activity(&session, act_id).await?),
        ActivitySubcommand::Show { act_id } => to_json(client.activity_details(&session, act_id).await?),
        ActivitySubcommand::Items { act_id, role } => {
            let role = view_role(&session, role)?;
            to_json(client.activity_items(&session, role, act_id).await?)
        }
        ActivitySubcommand::Leaderboard { act_id, role } => {
            let role = view_role(&session, role)?;
            to_json(client.activity_leaderboard(&session, role, act_id).await?)
        }
        ActivitySubcommand::Settings { act_id } => to_json(client.activity_settings(&session, act_id).await?),
        ActivitySubcommand::UpdateSettings { act_id, data } => {
            let settings: ActivitySettings = input::json_arg(&data)?;
            to_json(client.update_activity_settings(&session, act_id, &settings).await?)
        }
    }
}

/// An explicit `--as` wins; otherwise the session role picks the view.
fn view_role(session: &Session, requested: Option<Role>) -> Result<Role, CliError> {
    requested
        .or(session.role())
        .ok_or(CliError::Api(ApiError::Unauthorized(MissingCredential::Identity)))
}

async fn run_item(ctx: &CliContext, command: ItemSubcommand) -> Result<Value, CliError> {
    let session = ctx.session()?;
    let client = &ctx.client;
    match command {
        ItemSubcommand::Types => to_json(client.item_types(&session).await?),
        ItemSubcommand::List { item_type_id, scope, teacher_id } => {
            let query = ItemQuery { scope, teacher_id };
            to_json(client.items(&session, item_type_id, &query).await?)
        }
        ItemSubcommand::Show { item_id } => to_json(client.item_details(&session, item_id).await?),
        ItemSubcommand::Create { data } => {
            let draft: ItemDraft = input::json_arg(&data)?;
            to_json(client.create_item(&session, &draft).await?)
        }
        ItemSubcommand::Update { item_id, data } => {
            let draft: ItemDraft = input::json_arg(&data)?;
            to_json(client.update_item(&session, item_id, &draft).await?)
        }
        ItemSubcommand::Delete { item_id } => to_json(client.delete_item(&session, item_id).await?),
        ItemSubcommand::Languages => to_json(client.programming_languages(&session).await?),
    }
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
