//! Diesel schema for the inbound message archive.

diesel::table! {
    /// Inbound WhatsApp messages.
    whatsapp_messages (id) {
        /// Row identifier.
        id -> Uuid,
        /// Message identifier assigned by WhatsApp.
        #[max_length = 255]
        wa_message_id -> Varchar,
        /// Sender phone number.
        #[max_length = 64]
        wa_from -> Varchar,
        /// Receiving business number.
        #[max_length = 64]
        wa_to -> Nullable<Varchar>,
        /// Sender profile name.
        #[max_length = 255]
        profile_name -> Nullable<Varchar>,
        /// Message type.
        #[max_length = 32]
        message_type -> Varchar,
        /// Text body.
        message_text -> Nullable<Text>,
        /// Message JSON as received.
        raw -> Jsonb,
        /// Receipt timestamp.
        created_at -> Timestamptz,
    }
}
