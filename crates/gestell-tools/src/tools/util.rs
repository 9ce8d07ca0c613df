use uuid::Uuid;

/// Returns `collection_id` when it is a valid UUID, otherwise falls back to `default`.
pub fn validate_collection_id<'a>(default: &'a str, collection_id: Option<&'a str>) -> &'a str {
    match collection_id {
        Some(id) if Uuid::parse_str(id).is_ok() => id,
        _ => default,
    }
}
