//! Workout template management.

use gymlog_core::models::NewTemplate;
use gymlog_core::WorkoutStore;

use crate::app::AppContext;
use crate::cli::{TemplateCreateArgs, TemplateDeleteArgs, TemplateShowArgs};
use crate::helpers::confirm;
use crate::output;

pub fn handle_list(ctx: &AppContext) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let mut templates = store.list_templates()?;
    templates.sort_by(|a, b| {
        b.use_count
            .cmp(&a.use_count)
            .then_with(|| a.name.cmp(&b.name))
    });
    output::print_template_list(&templates, ctx.quiet());
    Ok(())
}

pub fn handle_show(ctx: &AppContext, args: &TemplateShowArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let template = store
        .get_template_by_name(&args.name)?
        .ok_or_else(|| anyhow::anyhow!("Template \"{}\" not found", args.name))?;
    output::print_template_detail(&template);
    Ok(())
}

pub fn handle_create(ctx: &AppContext, args: &TemplateCreateArgs) -> anyhow::Result<()> {
    if args.name.trim().is_empty() {
        return Err(anyhow::anyhow!("Template name is empty"));
    }

    let mut store = ctx.open_store()?;

    // Warn about names the library does not know; they are stored verbatim.
    if !ctx.quiet() {
        for name in &args.exercises {
            if store.get_exercise_by_name(name)?.is_none() {
                eprintln!("Warning: exercise \"{}\" is not in the library", name);
            }
        }
    }

    let mut template = NewTemplate::new(args.name.trim(), args.exercises.clone());
    if let Some(ref description) = args.description {
        template = template.with_description(description.clone());
    }
    store.insert_template(&template)?;

    output::success(
        &format!(
            "Created template \"{}\" ({} exercises)",
            template.name,
            template.exercise_names.len()
        ),
        ctx.quiet(),
    );
    Ok(())
}

pub fn handle_delete(ctx: &AppContext, args: &TemplateDeleteArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let template = store
        .get_template_by_name(&args.name)?
        .ok_or_else(|| anyhow::anyhow!("Template \"{}\" not found", args.name))?;

    if !confirm(&format!("Delete template \"{}\"?", template.name), args.yes)? {
        return Ok(());
    }

    store.delete_template(template.id)?;
    output::success(&format!("Deleted template \"{}\"", template.name), ctx.quiet());
    Ok(())
}
