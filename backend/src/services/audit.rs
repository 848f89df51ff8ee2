use serde_json::Value;

use crate::models::audit_log::NewAuditLog;
use crate::repositories::AuditLogRepository;
use crate::types::UserId;

/// Best-effort audit write; a failure is logged and never fails the request.
pub async fn record(
    repo: &dyn AuditLogRepository,
    actor: UserId,
    action: &'static str,
    entity_type: &'static str,
    entity_id: impl ToString,
    metadata: Value,
) {
    let entry = NewAuditLog {
        actor_user_id: Some(actor),
        action,
        entity_type,
        entity_id: entity_id.to_string(),
        metadata,
    };
    if let Err(err) = repo.insert(&entry).await {
        tracing::warn!(error = ?err, action, entity_type, "Failed to record audit log");
    }
}
