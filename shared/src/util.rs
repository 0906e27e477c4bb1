/// Generate a unique order ID.
///
/// UUID v4, rendered without hyphens to keep receipt-style IDs compact.
pub fn order_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
