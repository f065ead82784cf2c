//! Diesel schema for the command audit trail.

diesel::table! {
    /// Admin command attempts.
    admin_command_logs (id) {
        /// Entry identifier.
        id -> Uuid,
        /// Phone number of the sending admin.
        #[max_length = 64]
        admin_phone -> Varchar,
        /// Command name as parsed.
        #[max_length = 64]
        command -> Varchar,
        /// Parsed arguments as a JSON object of strings.
        args -> Jsonb,
        /// Whether the command completed.
        success -> Bool,
        /// Reply sent to the admin.
        response -> Nullable<Text>,
        /// Raw failure detail.
        error_message -> Nullable<Text>,
        /// When the command was handled.
        created_at -> Timestamptz,
    }
}
