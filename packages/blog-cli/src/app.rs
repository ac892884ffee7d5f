//! Interactive menu loop

use anyhow::{anyhow, Result};
use blog_core::{Post, Reconciler, Session};
use colored::Colorize;
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::render::{display_order, post_label, summary};

const MENU: &[&str] = &[
    "✏️  Create post",
    "🔍 Filter by ID",
    "📝 Edit post",
    "🗑️  Delete post",
    "🔄 Refresh view",
    "🛑 Exit",
];

pub async fn run(reconciler: Reconciler, mut session: Session) -> Result<()> {
    let term = Term::stdout();
    let theme = ColorfulTheme::default();

    println!("{}", "Loading...".dimmed());
    if let Err(e) = reconciler.initialize(&mut session).await {
        let message = session.last_error().unwrap_or("Error retrieving posts.");
        println!("{}", message.red().bold());
        return Err(anyhow!(e));
    }

    loop {
        print_view(&session);
        if let Some(message) = session.last_error() {
            println!("{}", message.red());
        }

        println!();
        let selection = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(MENU)
            .default(0)
            .interact_on(&term)?;

        match selection {
            0 => create(&theme, &reconciler, &mut session).await?,
            1 => filter(&theme, &reconciler, &mut session)?,
            2 => edit(&theme, &reconciler, &mut session).await?,
            3 => delete(&theme, &reconciler, &mut session).await?,
            4 => continue,
            5 => {
                println!("{}", "👋 Goodbye!".bright_blue());
                break;
            }
            _ => unreachable!(),
        }
    }

    Ok(())
}

fn print_view(session: &Session) {
    println!();
    println!("{}", style("Blog posts").bold());
    println!("{}", style(summary(session)).dim());

    for post in display_order(&session.view()) {
        println!();
        println!("{}", post_label(post).bold());
        println!("{}", post.body);
    }
}

fn required(input: &String) -> Result<(), &'static str> {
    if input.trim().is_empty() {
        Err("This field is required")
    } else {
        Ok(())
    }
}

async fn create(theme: &ColorfulTheme, reconciler: &Reconciler, session: &mut Session) -> Result<()> {
    let title: String = Input::with_theme(theme)
        .with_prompt("Title")
        .validate_with(required)
        .interact_text()?;
    let body: String = Input::with_theme(theme)
        .with_prompt("Body")
        .validate_with(required)
        .interact_text()?;

    match reconciler.add(session, &title, &body).await {
        Ok(post) => println!("{}", format!("Created post #{}", post.id).green()),
        Err(e) => tracing::debug!(error = %e, "Create failed"),
    }
    Ok(())
}

fn filter(theme: &ColorfulTheme, reconciler: &Reconciler, session: &mut Session) -> Result<()> {
    let criterion: String = Input::with_theme(theme)
        .with_prompt("Post ID (empty shows all)")
        .with_initial_text(session.filter().criterion())
        .allow_empty(true)
        .interact_text()?;

    reconciler.apply_filter(session, &criterion);
    Ok(())
}

/// Let the user choose one post from the current view. `None` means cancelled.
fn pick_post(theme: &ColorfulTheme, session: &Session, prompt: &str) -> Result<Option<Post>> {
    let posts = display_order(&session.view());
    if posts.is_empty() {
        println!("{}", style("No posts to choose from").dim());
        return Ok(None);
    }

    let mut labels: Vec<String> = posts.iter().map(|p| post_label(p)).collect();
    labels.push("Cancel".to_string());

    let selection = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(posts.get(selection).map(|p| (*p).clone()))
}

async fn edit(theme: &ColorfulTheme, reconciler: &Reconciler, session: &mut Session) -> Result<()> {
    let Some(post) = pick_post(theme, session, "Edit which post?")? else {
        return Ok(());
    };

    let title: String = Input::with_theme(theme)
        .with_prompt("Title")
        .with_initial_text(&post.title)
        .interact_text()?;
    let body: String = Input::with_theme(theme)
        .with_prompt("Body")
        .with_initial_text(&post.body)
        .interact_text()?;

    let save = Confirm::with_theme(theme)
        .with_prompt("Save changes?")
        .default(true)
        .interact()?;
    if !save {
        println!("{}", style("Cancelled").dim());
        return Ok(());
    }

    match reconciler.edit(session, post.id, &title, &body).await {
        Ok(true) => println!("{}", format!("Saved post #{}", post.id).green()),
        Ok(false) => println!("{}", style("Post is no longer listed").yellow()),
        Err(e) => tracing::debug!(error = %e, "Edit failed"),
    }
    Ok(())
}

async fn delete(theme: &ColorfulTheme, reconciler: &Reconciler, session: &mut Session) -> Result<()> {
    let Some(post) = pick_post(theme, session, "Delete which post?")? else {
        return Ok(());
    };

    let confirmed = Confirm::with_theme(theme)
        .with_prompt(format!("Delete {}?", post_label(&post)))
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    match reconciler.remove(session, post.id).await {
        Ok(_) => println!("{}", format!("Deleted post #{}", post.id).green()),
        Err(e) => tracing::debug!(error = %e, "Delete failed"),
    }
    Ok(())
}
