//! Diesel schema for catalogue persistence.

diesel::table! {
    /// Product categories.
    categories (id) {
        /// Category identifier.
        id -> Uuid,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Unique slug.
        #[max_length = 255]
        slug -> Varchar,
        /// Whether the category is shown on the storefront.
        is_active -> Bool,
    }
}

diesel::table! {
    /// Product records.
    products (id) {
        /// Product identifier.
        id -> Uuid,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Unique slug.
        #[max_length = 255]
        slug -> Varchar,
        /// Optional description.
        description -> Nullable<Text>,
        /// Unit price.
        price -> Numeric,
        /// Optional category.
        category_id -> Nullable<Uuid>,
        /// Units in stock.
        stock_quantity -> Int4,
        /// Storefront availability.
        is_active -> Bool,
        /// Storefront highlight flag.
        is_featured -> Bool,
        /// Listing sort key.
        display_order -> Int4,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
