use portfolio::commit::{SAVE_PROMPT, SaveRequest};
use portfolio::editor::{Field, RecordEditor};
use portfolio::lifecycle::delete_prompt;
use portfolio::session::LoadState;

use super::*;

type Session = AppsSession<RemoteClient>;

pub(super) fn handle_apps_command(
    store: &LocalStore,
    trace: &mut Trace,
    command: AppsCommands,
) -> Result<()> {
    let mut session = open_session(store)?;

    if let AppsCommands::Pull { discard } = command {
        if session.buffer().has_unsaved_changes() && !discard {
            anyhow::bail!(
                "there are {} unsaved change(s); save them or pass --discard to drop them",
                session.diff().len()
            );
        }
        let count = load(&mut session, trace)?;
        store.write_buffer(session.buffer())?;
        println!("Loaded {} applications", count);
        return Ok(());
    }

    if *session.load_state() == LoadState::NotLoaded {
        load(&mut session, trace)?;
        store.write_buffer(session.buffer())?;
    }

    match command {
        AppsCommands::Pull { .. } => {}
        AppsCommands::List { search, json } => {
            let rows = session.rows(&search);
            if json {
                print_json(&rows, "apps")?;
            } else if rows.is_empty() {
                println!("No applications");
            } else {
                for row in rows {
                    println!(
                        "{} {}  change={}  owner={}  hosts={}  {}",
                        if row.unsaved { "*" } else { " " },
                        row.app_name,
                        row.change_number,
                        row.application_owner,
                        row.host_count,
                        row.enablement.label()
                    );
                }
            }
        }
        AppsCommands::Show { name, json } => {
            let record = session
                .get(&name)
                .with_context(|| format!("no application named {:?}", name))?;
            if json {
                print_json(record, "app")?;
            } else {
                println!("name: {}", record.app_name);
                println!("change: {}", record.change_number);
                println!("owner: {}", record.application_owner);
                println!("window: {}", record.maintenance_window);
                println!("description: {}", record.change_description);
                println!("impact: {}", record.infrastructure_impact);
                println!("hosts: {}", record.hosts.join(", "));
                println!("status: {}", record.enablement().label());
                if session.diff().is_marked(&name) {
                    println!("(unsaved changes)");
                }
            }
        }
        AppsCommands::Add {
            name,
            change,
            fields,
        } => {
            let editor = session.open_create()?;
            editor.change(Field::AppName, &name);
            editor.change(Field::ChangeNumber, &change);
            apply_fields(editor, fields);
            let saved = session.commit_editor()?;
            store.write_buffer(session.buffer())?;
            println!(
                "Staged new application {} (run `portfolio apps save` to apply)",
                saved
            );
        }
        AppsCommands::Edit {
            name,
            rename,
            change,
            fields,
        } => {
            let editor = session.open_edit(&name)?;
            if let Some(rename) = rename {
                editor.change(Field::AppName, &rename);
            }
            if let Some(change) = change {
                editor.change(Field::ChangeNumber, &change);
            }
            apply_fields(editor, fields);
            let saved = session.commit_editor()?;
            store.write_buffer(session.buffer())?;
            println!("Staged changes to {} (run `portfolio apps save` to apply)", saved);
        }
        AppsCommands::Rm { name, yes } => {
            let from = session.lifecycle().delete_phase().label();
            session.request_delete(&name)?;
            let pending = session.lifecycle().delete_phase().label();
            trace.state_change("delete", from, pending);
            if !confirm(&delete_prompt(&name), yes)? {
                session.cancel_delete();
                trace.state_change("delete", pending, session.lifecycle().delete_phase().label());
                println!("Cancelled");
                return Ok(());
            }
            let result = session.confirm_delete(&mut notifier(trace));
            trace.state_change("delete", pending, session.lifecycle().delete_phase().label());
            result?;
            store.write_buffer(session.buffer())?;
        }
        AppsCommands::Toggle { name, yes } => {
            let from = session.lifecycle().toggle_phase().label();
            let request = session.request_toggle(&name)?;
            let pending = session.lifecycle().toggle_phase().label();
            trace.state_change("toggle", from, pending);
            if !confirm(&format!("{}: {}", request.title(), request.prompt()), yes)? {
                session.cancel_toggle();
                trace.state_change("toggle", pending, session.lifecycle().toggle_phase().label());
                println!("Cancelled");
                return Ok(());
            }
            let result = session.confirm_toggle(&mut notifier(trace));
            trace.state_change("toggle", pending, session.lifecycle().toggle_phase().label());
            result?;
            store.write_buffer(session.buffer())?;
        }
        AppsCommands::Diff { json } => {
            let diff = session.diff();
            if json {
                print_json(&diff, "diff")?;
            } else if diff.is_empty() {
                println!("No unsaved changes");
            } else {
                for line in diff.summary_lines() {
                    println!("{}", line);
                }
            }
        }
        AppsCommands::Discard => {
            let dropped = session.diff().len();
            session.discard();
            store.write_buffer(session.buffer())?;
            println!("Discarded {} unsaved change(s)", dropped);
        }
        AppsCommands::Save { yes } => save(store, trace, &mut session, yes)?,
    }
    Ok(())
}

fn load(session: &mut Session, trace: &mut Trace) -> Result<usize> {
    let from = session.load_state().label();
    let result = session.load(&mut notifier(trace));
    trace.state_change("load", from, session.load_state().label());
    Ok(result?)
}

fn apply_fields(editor: &mut RecordEditor, fields: AppFields) {
    let AppFields {
        owner,
        window,
        description,
        impact,
        hosts,
    } = fields;
    for (field, value) in [
        (Field::ApplicationOwner, owner),
        (Field::MaintenanceWindow, window),
        (Field::ChangeDescription, description),
        (Field::InfrastructureImpact, impact),
        (Field::Hosts, hosts),
    ] {
        if let Some(value) = value {
            editor.change(field, &value);
        }
    }
}

fn save(store: &LocalStore, trace: &mut Trace, session: &mut Session, yes: bool) -> Result<()> {
    let from = session.committer().phase().label();
    let diff = match session.request_save() {
        SaveRequest::NothingToSave => {
            println!("No changes to save");
            return Ok(());
        }
        SaveRequest::ConfirmPending(diff) => diff,
    };
    let pending = session.committer().phase().label();
    trace.state_change("save", from, pending);
    for line in diff.summary_lines() {
        println!("{}", line);
    }
    if !confirm(SAVE_PROMPT, yes)? {
        session.cancel_save();
        trace.state_change("save", pending, session.committer().phase().label());
        println!("Cancelled");
        return Ok(());
    }

    let result = session.confirm_save(&mut notifier(trace));
    trace.state_change("save", pending, session.committer().phase().label());
    if let Some(report) = result? {
        trace.event("save_report", &report);
        if let Some(err) = &report.reload_error {
            eprintln!("warning: saved, but reloading failed: {}", err);
        }
        store.write_buffer(session.buffer())?;
    }
    Ok(())
}
