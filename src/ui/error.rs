use flockbook::domain::entities::ValidationError;
use flockbook::domain::ports::StorageError;
use flockbook::FlockError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::json::events::ErrorEvent;

/// Stable code for `--json` error documents
fn error_code(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<FlockError>() {
        Some(FlockError::Validation(ValidationError::NotFinite { .. })) => "invalid-number",
        Some(FlockError::Validation(_)) => "missing-field",
        Some(FlockError::Storage(StorageError::Corrupted { .. })) => "corrupted",
        Some(FlockError::Storage(_)) => "storage",
        Some(FlockError::Guard(_)) => "rejected",
        Some(FlockError::DuplicateEarTag { .. }) => "duplicate-ear-tag",
        Some(FlockError::InvalidConfig { .. }) => "invalid-config",
        Some(FlockError::Io(_)) => "io",
        None => "error",
    }
}

fn fix_for(err: &FlockError) -> Option<String> {
    match err {
        FlockError::Validation(ValidationError::MissingField { field, .. }) => {
            Some(format!("Provide a non-empty value for '{field}'"))
        }
        FlockError::Validation(ValidationError::NotFinite { field, .. }) => Some(format!(
            "Pass an ordinary number for '{field}'; inf and NaN cannot be saved"
        )),
        FlockError::Validation(ValidationError::ZeroAmount { .. }) => {
            Some("Pass --price or --total with a non-zero amount".to_string())
        }
        FlockError::DuplicateEarTag { id } => Some(format!(
            "Use another ear tag, or change the existing sheep with `flockbook sheep update {id}`"
        )),
        FlockError::Guard(_) => {
            Some("Set [store] guard = \"permissive\" to allow this change".to_string())
        }
        FlockError::InvalidConfig { .. } => Some("Fix the TOML syntax and try again".to_string()),
        _ => None,
    }
}

pub fn format_flock_error(err: &FlockError, supports_color: bool, supports_unicode: bool) -> String {
    let block = match err {
        FlockError::Storage(StorageError::Corrupted { path, message }) => {
            ErrorBlock::new(format!("farm data file is corrupted: {message}"))
                .with_location(path.display().to_string())
                .with_fix("Restore a sheep_farm_backup_*.json over it")
                .with_fix("Or move it aside to start again from the seed farm")
        }
        FlockError::InvalidConfig { path, message } => {
            ErrorBlock::new(message.clone()).with_location(path.display().to_string())
        }
        other => ErrorBlock::new(other.to_string()),
    };
    let block = match fix_for(err) {
        Some(fix) => block.with_fix(fix),
        None => block,
    };
    block.render(supports_color, supports_unicode)
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    if let Some(flock) = err.downcast_ref::<FlockError>() {
        return format_flock_error(flock, supports_color, supports_unicode);
    }

    format!("[ERROR] {:#}\n", err)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let mut event = ErrorEvent::new(error_code(err), format!("{:#}", err));
        if let Some(fix) = err.downcast_ref::<FlockError>().and_then(fix_for) {
            event = event.with_help(fix);
        }
        let _ = crate::ui::json::emit_event(&event);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    let color = caps.supports_color && !caps.is_ci;
    eprint!("{}", format_error(err, color, caps.supports_unicode));
}
