//! # Form Controller
//!
//! The state machine behind the form: current field values, the search term,
//! the displayed rows, and the selection.
//!
//! ## State & Actions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          FormController                                 │
//! │                                                                         │
//! │  State                           Actions                                │
//! │  ─────                           ───────                                │
//! │  fields: product, description,   add()              validate → insert   │
//! │          quantity, code          update_selected()  validate → update   │
//! │  search_term                     delete_selected()  delete by selection │
//! │  rows: Vec<StockRecord>          search() / show_all()  refresh rows    │
//! │  selected: Option<i64>           select(id) / clear_form()              │
//! │                                                                         │
//! │  Rules                                                                  │
//! │  ─────                                                                  │
//! │  • A refresh (search/show_all) replaces rows and drops the selection.   │
//! │  • A successful mutation clears the form and refreshes the full list.   │
//! │  • A failed validation changes nothing: fields, rows and selection      │
//! │    all survive so the user can correct the input.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The controller owns the [`Database`] handle. Nothing else in the process
//! talks to the store, and `close()` consumes the controller to release the
//! connection on the way out.

use tracing::{debug, info, warn};

use stockdesk_core::validation::{parse_quantity, validate_code, validate_required};
use stockdesk_core::{StockDraft, StockRecord};
use stockdesk_db::Database;

use crate::error::AppError;

/// The four user-editable field values, exactly as typed.
///
/// `quantity` stays a string here: it is validated and parsed only when an
/// add or update is submitted, like any other form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub product: String,
    pub description: String,
    pub quantity: String,
    pub code: String,
}

/// Form state plus the database handle it drives.
#[derive(Debug)]
pub struct FormController {
    db: Database,
    fields: FormFields,
    search_term: String,
    rows: Vec<StockRecord>,
    selected: Option<i64>,
}

impl FormController {
    /// Creates a controller with empty fields and an empty display.
    ///
    /// Call [`show_all`](Self::show_all) afterwards to populate the initial
    /// row list.
    pub fn new(db: Database) -> Self {
        FormController {
            db,
            fields: FormFields::default(),
            search_term: String::new(),
            rows: Vec::new(),
            selected: None,
        }
    }

    // ===== Field editing =====

    pub fn set_product(&mut self, value: impl Into<String>) {
        self.fields.product = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.fields.description = value.into();
    }

    pub fn set_quantity(&mut self, value: impl Into<String>) {
        self.fields.quantity = value.into();
    }

    pub fn set_code(&mut self, value: impl Into<String>) {
        self.fields.code = value.into();
    }

    pub fn set_search_term(&mut self, value: impl Into<String>) {
        self.search_term = value.into();
    }

    // ===== Read access =====

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The rows currently on display, in the order they are rendered.
    pub fn rows(&self) -> &[StockRecord] {
        &self.rows
    }

    /// The store id of the selected row, if a row is selected.
    pub fn selected_id(&self) -> Option<i64> {
        self.selected
    }

    // ===== Actions =====

    /// Validates the current fields and inserts a new record.
    ///
    /// ## Validation Order
    /// 1. `code` must be 12 or 13 ASCII digits
    /// 2. `quantity` must be a digit string that fits an `i64`
    /// 3. `product` and `description` must be non-empty
    ///
    /// The first failure is reported and the form is left untouched. On
    /// success the form and search term are cleared and the display shows
    /// the full list again.
    pub async fn add(&mut self) -> Result<StockRecord, AppError> {
        let draft = self.validated_draft()?;

        let record = self.db.stock().insert(&draft).await?;
        info!(id = %record.id, product = %record.product, "Stock record added");

        self.clear_form();
        self.show_all().await?;
        Ok(record)
    }

    /// Validates the current fields and overwrites the selected row.
    ///
    /// Requires a selection; validation is identical to [`add`](Self::add).
    /// If the selected row vanished from the store between refresh and
    /// action, the miss is logged and the display refreshed as usual.
    ///
    /// ## Returns
    /// The id the update targeted.
    pub async fn update_selected(&mut self) -> Result<i64, AppError> {
        let id = self.selected.ok_or(AppError::MissingSelection)?;
        let draft = self.validated_draft()?;

        let updated = self.db.stock().update(id, &draft).await?;
        if updated {
            info!(id = %id, "Stock record updated");
        } else {
            warn!(id = %id, "Selected row no longer exists; nothing updated");
        }

        self.clear_form();
        self.show_all().await?;
        Ok(id)
    }

    /// Deletes the selected row.
    ///
    /// Requires a selection. Field values are irrelevant here and are not
    /// validated; the form is still cleared afterwards, mirroring the other
    /// mutations.
    ///
    /// ## Returns
    /// The id the delete targeted.
    pub async fn delete_selected(&mut self) -> Result<i64, AppError> {
        let id = self.selected.ok_or(AppError::MissingSelection)?;

        let deleted = self.db.stock().delete(id).await?;
        if deleted {
            info!(id = %id, "Stock record deleted");
        } else {
            warn!(id = %id, "Selected row no longer exists; nothing deleted");
        }

        self.clear_form();
        self.show_all().await?;
        Ok(id)
    }

    /// Replaces the display with every record and drops the selection.
    pub async fn show_all(&mut self) -> Result<(), AppError> {
        self.rows = self.db.stock().list_all().await?;
        self.selected = None;
        debug!(count = self.rows.len(), "Display refreshed (all rows)");
        Ok(())
    }

    /// Replaces the display with the rows matching the current search term
    /// and drops the selection.
    pub async fn search(&mut self) -> Result<(), AppError> {
        self.rows = self.db.stock().search(&self.search_term).await?;
        self.selected = None;
        debug!(
            term = %self.search_term,
            count = self.rows.len(),
            "Display refreshed (search)"
        );
        Ok(())
    }

    /// Selects a displayed row by its id.
    ///
    /// The id must belong to one of the rows currently on display; anything
    /// else is a [`NoSuchRow`](AppError::NoSuchRow) error. The selection
    /// survives until the next refresh.
    pub fn select(&mut self, id: i64) -> Result<(), AppError> {
        if self.rows.iter().any(|r| r.id == id) {
            self.selected = Some(id);
            debug!(id = %id, "Row selected");
            Ok(())
        } else {
            Err(AppError::NoSuchRow { id })
        }
    }

    /// Clears all four fields and the search term.
    ///
    /// The displayed rows and the selection are left alone; only a refresh
    /// invalidates a selection.
    pub fn clear_form(&mut self) {
        self.fields = FormFields::default();
        self.search_term.clear();
    }

    /// Closes the database connection, consuming the controller.
    pub async fn close(self) {
        self.db.close().await;
    }

    /// Runs the full validation chain over the current fields and produces
    /// the draft handed to the store.
    fn validated_draft(&self) -> Result<StockDraft, AppError> {
        validate_code(&self.fields.code)?;
        let quantity = parse_quantity(&self.fields.quantity)?;
        validate_required("product", &self.fields.product)?;
        validate_required("description", &self.fields.description)?;

        Ok(StockDraft {
            product: self.fields.product.clone(),
            description: self.fields.description.clone(),
            quantity,
            code: self.fields.code.clone(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use stockdesk_core::ValidationError;
    use stockdesk_db::DbConfig;

    async fn controller() -> FormController {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        FormController::new(db)
    }

    fn fill(c: &mut FormController, product: &str, description: &str, quantity: &str, code: &str) {
        c.set_product(product);
        c.set_description(description);
        c.set_quantity(quantity);
        c.set_code(code);
    }

    /// Adds a record through the full controller path and returns its id.
    async fn add_one(c: &mut FormController, product: &str, code: &str) -> i64 {
        fill(c, product, "test item", "10", code);
        c.add().await.unwrap().id
    }

    #[tokio::test]
    async fn test_add_inserts_and_resets_the_form() {
        let mut c = controller().await;
        fill(&mut c, "Widget", "Small widget", "10", "123456789012");
        c.set_search_term("leftover");

        let record = c.add().await.unwrap();
        assert_eq!(record.product, "Widget");
        assert_eq!(record.quantity, 10);

        // Form and search term cleared, full list displayed, no selection
        assert_eq!(*c.fields(), FormFields::default());
        assert_eq!(c.search_term(), "");
        assert_eq!(c.rows().len(), 1);
        assert_eq!(c.selected_id(), None);
    }

    #[tokio::test]
    async fn test_add_reports_code_failure_first() {
        let mut c = controller().await;
        // Both code and quantity are invalid; the code error wins
        fill(&mut c, "", "", "abc", "12345");

        let err = c.add().await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::InvalidCode)
        ));
    }

    #[tokio::test]
    async fn test_add_reports_quantity_before_missing_fields() {
        let mut c = controller().await;
        fill(&mut c, "", "", "ten", "123456789012");

        let err = c.add().await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::InvalidQuantity)
        ));
    }

    #[tokio::test]
    async fn test_add_requires_product_and_description() {
        let mut c = controller().await;
        fill(&mut c, "", "has description", "5", "123456789012");

        let err = c.add().await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::MissingField { field: "product" })
        ));

        fill(&mut c, "has product", "   ", "5", "123456789012");
        let err = c.add().await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::MissingField { field: "description" })
        ));
    }

    #[tokio::test]
    async fn test_failed_add_keeps_fields_and_store_untouched() {
        let mut c = controller().await;
        add_one(&mut c, "Widget", "123456789012").await;

        // Second add with a short code is rejected
        fill(&mut c, "Gadget", "Bigger widget", "4", "12345");
        assert!(c.add().await.is_err());

        // Store still has exactly one row and the form kept its values
        assert_eq!(c.rows().len(), 1);
        assert_eq!(c.fields().product, "Gadget");
        assert_eq!(c.fields().code, "12345");
    }

    #[tokio::test]
    async fn test_update_without_selection_is_an_error() {
        let mut c = controller().await;
        add_one(&mut c, "Widget", "123456789012").await;
        fill(&mut c, "Widget", "Renamed", "11", "123456789012");

        let err = c.update_selected().await.unwrap_err();
        assert!(matches!(err, AppError::MissingSelection));
    }

    #[tokio::test]
    async fn test_update_checks_selection_before_fields() {
        let mut c = controller().await;
        // Invalid everything, but the missing selection is reported first
        fill(&mut c, "", "", "x", "1");

        let err = c.update_selected().await.unwrap_err();
        assert!(matches!(err, AppError::MissingSelection));
    }

    #[tokio::test]
    async fn test_update_overwrites_the_selected_row() {
        let mut c = controller().await;
        let id = add_one(&mut c, "Widget", "123456789012").await;

        c.select(id).unwrap();
        fill(&mut c, "Widget v2", "Improved widget", "25", "4006381333931");
        let updated_id = c.update_selected().await.unwrap();
        assert_eq!(updated_id, id);

        // Same id, new values; selection dropped by the refresh
        assert_eq!(c.rows().len(), 1);
        assert_eq!(c.rows()[0].id, id);
        assert_eq!(c.rows()[0].product, "Widget v2");
        assert_eq!(c.rows()[0].quantity, 25);
        assert_eq!(c.selected_id(), None);
    }

    #[tokio::test]
    async fn test_update_validates_like_add() {
        let mut c = controller().await;
        let id = add_one(&mut c, "Widget", "123456789012").await;
        c.select(id).unwrap();

        fill(&mut c, "Widget", "desc", "-3", "123456789012");
        let err = c.update_selected().await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::InvalidQuantity)
        ));

        // Error path: row unchanged, selection survives
        assert_eq!(c.rows()[0].product, "Widget");
        assert_eq!(c.selected_id(), Some(id));
    }

    #[tokio::test]
    async fn test_update_of_vanished_row_is_logged_not_fatal() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut c = FormController::new(db.clone());
        let id = add_one(&mut c, "Widget", "123456789012").await;
        c.select(id).unwrap();

        // Row disappears behind the controller's back
        assert!(db.stock().delete(id).await.unwrap());

        fill(&mut c, "Widget", "desc", "1", "123456789012");
        let targeted = c.update_selected().await.unwrap();
        assert_eq!(targeted, id);
        assert!(c.rows().is_empty());
    }

    #[tokio::test]
    async fn test_delete_without_selection_is_an_error() {
        let mut c = controller().await;
        add_one(&mut c, "Widget", "123456789012").await;

        let err = c.delete_selected().await.unwrap_err();
        assert!(matches!(err, AppError::MissingSelection));
    }

    #[tokio::test]
    async fn test_delete_ignores_field_contents() {
        let mut c = controller().await;
        let id = add_one(&mut c, "Widget", "123456789012").await;
        c.select(id).unwrap();

        // Garbage in the fields must not block a delete
        fill(&mut c, "", "", "not a number", "nope");
        let deleted_id = c.delete_selected().await.unwrap();
        assert_eq!(deleted_id, id);
        assert!(c.rows().is_empty());
        assert_eq!(c.selected_id(), None);
    }

    #[tokio::test]
    async fn test_select_requires_a_displayed_row() {
        let mut c = controller().await;
        let id = add_one(&mut c, "Widget", "123456789012").await;

        // Narrow the display to nothing, then try to select
        c.set_search_term("no-such-text");
        c.search().await.unwrap();
        assert!(c.rows().is_empty());
        let err = c.select(id).unwrap_err();
        assert!(matches!(err, AppError::NoSuchRow { id: e } if e == id));

        // Back on display, the same id selects fine
        c.show_all().await.unwrap();
        c.select(id).unwrap();
        assert_eq!(c.selected_id(), Some(id));
    }

    #[tokio::test]
    async fn test_refresh_invalidates_the_selection() {
        let mut c = controller().await;
        let id = add_one(&mut c, "Widget", "123456789012").await;
        c.select(id).unwrap();

        c.show_all().await.unwrap();
        assert_eq!(c.selected_id(), None);

        c.select(id).unwrap();
        c.search().await.unwrap();
        assert_eq!(c.selected_id(), None);
    }

    #[tokio::test]
    async fn test_search_narrows_the_display() {
        let mut c = controller().await;
        add_one(&mut c, "Laptop", "400638133393").await;
        add_one(&mut c, "Mouse", "123456789012").await;

        c.set_search_term("lap");
        c.search().await.unwrap();
        assert_eq!(c.rows().len(), 1);
        assert_eq!(c.rows()[0].product, "Laptop");

        c.show_all().await.unwrap();
        assert_eq!(c.rows().len(), 2);
    }

    #[tokio::test]
    async fn test_clear_form_keeps_the_selection() {
        let mut c = controller().await;
        let id = add_one(&mut c, "Widget", "123456789012").await;
        c.select(id).unwrap();

        fill(&mut c, "a", "b", "1", "123456789012");
        c.set_search_term("b");
        c.clear_form();

        assert_eq!(*c.fields(), FormFields::default());
        assert_eq!(c.search_term(), "");
        assert_eq!(c.selected_id(), Some(id));
        assert_eq!(c.rows().len(), 1);
    }

    #[tokio::test]
    async fn test_close_releases_the_pool() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let c = FormController::new(db.clone());

        c.close().await;
        assert!(!db.health_check().await);
    }
}
