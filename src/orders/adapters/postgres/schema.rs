//! Diesel schema for order persistence.

diesel::table! {
    /// Order headers.
    orders (id) {
        /// Order identifier.
        id -> Uuid,
        /// Human-facing order number.
        #[max_length = 64]
        order_number -> Varchar,
        /// Customer name.
        #[max_length = 255]
        customer_name -> Varchar,
        /// Customer phone number.
        #[max_length = 64]
        customer_phone -> Varchar,
        /// Customer e-mail address.
        #[max_length = 255]
        customer_email -> Nullable<Varchar>,
        /// Delivery address.
        delivery_address -> Text,
        /// Notes for the kitchen or courier.
        special_instructions -> Nullable<Text>,
        /// Order total.
        total_amount -> Numeric,
        /// Fulfilment state.
        #[max_length = 32]
        status -> Varchar,
        /// Placement timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Order line items.
    order_items (id) {
        /// Line item identifier.
        id -> Uuid,
        /// Owning order.
        order_id -> Uuid,
        /// Catalogue product, if any.
        product_id -> Nullable<Uuid>,
        /// Product name at checkout.
        #[max_length = 255]
        product_name -> Varchar,
        /// Unit price at checkout.
        product_price -> Numeric,
        /// Units ordered.
        quantity -> Int4,
        /// Line total.
        total_price -> Numeric,
        /// Product image at checkout.
        product_image_url -> Nullable<Text>,
        /// Product slug at checkout.
        #[max_length = 255]
        product_slug -> Nullable<Varchar>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(order_items -> orders (order_id));
diesel::allow_tables_to_appear_in_same_query!(orders, order_items);
