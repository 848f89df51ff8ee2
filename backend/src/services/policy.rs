//! Role and tower-scope rules shared by approvals, bookings and role changes.

use crate::error::AppError;
use crate::models::reservation::Reservation;
use crate::models::user::{AssignRolePayload, User, UserRole};
use crate::types::TowerId;

pub const APPROVER_ROLES: &[UserRole] = &[
    UserRole::Porteiro,
    UserRole::Subsindico,
    UserRole::SindicoGeral,
    UserRole::Superuser,
];
pub const ROLE_ASSIGNER_ROLES: &[UserRole] =
    &[UserRole::Subsindico, UserRole::SindicoGeral, UserRole::Superuser];
pub const CONDO_MANAGER_ROLES: &[UserRole] = &[UserRole::SindicoGeral, UserRole::Superuser];

pub fn require_role(user: &User, allowed: &[UserRole]) -> Result<(), AppError> {
    if allowed.contains(&user.role) {
        Ok(())
    } else {
        Err(AppError::Forbidden("Insufficient permissions".into()))
    }
}

/// Tower-scoped staff may only act on residents of their own tower.
pub fn ensure_same_tower(actor: &User, target_tower: Option<TowerId>) -> Result<(), AppError> {
    if actor.is_admin_like() {
        return Ok(());
    }
    match (actor.tower_id, target_tower) {
        (Some(own), Some(target)) if own == target => Ok(()),
        _ => Err(AppError::Forbidden("Tower scope violation.".into())),
    }
}

pub fn ensure_can_cancel(actor: &User, reservation: &Reservation) -> Result<(), AppError> {
    if reservation.user_id == actor.id || actor.is_admin_like() {
        Ok(())
    } else {
        Err(AppError::Forbidden("Insufficient permissions to cancel".into()))
    }
}

/// Checks `payload` against the actor's role and returns the tower the target
/// should end up in, if it changes.
pub fn resolve_role_assignment(
    actor: &User,
    target: &User,
    payload: &AssignRolePayload,
) -> Result<Option<TowerId>, AppError> {
    match actor.role {
        UserRole::Subsindico => {
            if payload.role != UserRole::Porteiro {
                return Err(AppError::Forbidden(
                    "Subsíndico can only assign PORTEIRO".into(),
                ));
            }
            let own_tower = actor
                .tower_id
                .ok_or_else(|| AppError::BadRequest("Subsíndico must have tower_id".into()))?;
            if payload.tower_id.is_some_and(|tower| tower != own_tower) {
                return Err(AppError::Forbidden("Tower scope violation.".into()));
            }
            // Residents without a tower yet are pulled into the subsíndico's one.
            ensure_same_tower(actor, target.tower_id.or(Some(own_tower)))?;
            Ok(Some(own_tower))
        }
        UserRole::SindicoGeral => {
            if payload.role == UserRole::Superuser {
                return Err(AppError::Forbidden(
                    "Only SUPERUSER can assign SUPERUSER".into(),
                ));
            }
            Ok(payload.tower_id)
        }
        UserRole::Superuser => Ok(payload.tower_id),
        UserRole::Morador | UserRole::Porteiro => {
            Err(AppError::Forbidden("Insufficient permissions".into()))
        }
    }
}
