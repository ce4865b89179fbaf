use sea_orm::DatabaseConnection;

use crate::{
    model::guest::UpdateGuestForm,
    server::{
        data::guest::GuestRepository,
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            guest::{Guest, UpdateGuestParams},
            session::GuestSession,
        },
        navigation::Mutation,
        service::view_cache::ViewCache,
        util::validate::{split_nationality, validate_national_id},
    },
};

pub const PROFILE_PATH: &str = "/account/profile";

pub struct GuestService<'a> {
    db: &'a DatabaseConnection,
    view_cache: &'a ViewCache,
}

impl<'a> GuestService<'a> {
    pub fn new(db: &'a DatabaseConnection, view_cache: &'a ViewCache) -> Self {
        Self { db, view_cache }
    }

    /// Gets the signed-in guest's profile.
    ///
    /// # Returns
    /// - `Ok(Guest)` - The session's guest
    /// - `Err(AppError::AuthErr(Unauthenticated))` - No session
    /// - `Err(AppError::NotFound)` - The session's guest no longer exists
    pub async fn get_profile(&self, session: Option<&GuestSession>) -> Result<Guest, AppError> {
        let session = AuthGuard::require(session)?;
        let repo = GuestRepository::new(self.db);

        repo.find_by_id(session.guest_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Guest not found".to_string()))
    }

    /// Updates the signed-in guest's national ID and nationality.
    ///
    /// The nationality field carries the country name and flag code joined by `%`.
    ///
    /// # Returns
    /// - `Ok(Mutation::UpdateGuest)` - Profile stored and profile view invalidated
    /// - `Err(AppError::AuthErr(Unauthenticated))` - No session
    /// - `Err(AppError::InvalidInput)` - National ID is not 6-12 letters or digits
    /// - `Err(AppError::NotFound)` - The session's guest no longer exists
    /// - `Err(AppError::Persistence)` - The write failed
    pub async fn update_guest(
        &self,
        session: Option<&GuestSession>,
        form: &UpdateGuestForm,
    ) -> Result<Mutation, AppError> {
        let session = AuthGuard::require(session)?;

        let (nationality, country_flag) = split_nationality(&form.nationality);
        if let Err(err) = validate_national_id(&form.national_id) {
            tracing::warn!(guest_id = session.guest_id, "Rejected national ID");
            return Err(err);
        }

        let repo = GuestRepository::new(self.db);
        let rows = repo
            .update_profile(
                session.guest_id,
                UpdateGuestParams {
                    national_id: form.national_id.clone(),
                    nationality,
                    country_flag,
                },
            )
            .await
            .map_err(|e| AppError::persistence("Guest could not be updated", e))?;

        if rows == 0 {
            return Err(AppError::NotFound("Guest not found".to_string()));
        }

        self.view_cache.invalidate(PROFILE_PATH).await;

        Ok(Mutation::UpdateGuest {
            guest_id: session.guest_id,
        })
    }
}
