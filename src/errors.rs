use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidJson, "Invalid {json_type} (invalid JSON format).", { json_type: &str });
define_client_error!(InvalidConfig, "Invalid configuration: {details}.", { details: &str });
define_client_error!(InvalidBillDate, "Invalid bill date: '{date}'.", { date: &str });
define_client_error!(InvalidAmount, "Invalid amount: '{value}'.", { value: &str });

// Store-related.
define_client_error!(
    StoreRequestFailed,
    "Bill store request failed: {details}",
    { details: &str }
);
define_client_error!(BillNotFound, "No bill found for selector '{selector}'.", { selector: &str });

// New bill.
define_client_error!(
    UnsupportedReceiptFormat,
    "Receipt '{file_name}' must be a jpg, jpeg or png file.",
    { file_name: &str }
);
define_client_error!(
    MissingReceipt,
    "A receipt must be uploaded before the bill can be submitted."
);
define_client_error!(NotConnected, "No user is connected.");

// Receipt export.
define_client_error!(ImageLoadFailed, "Could not load receipt image '{url}'.", { url: &str });
define_internal_error!(
    PdfExportUnavailable,
    "No image loader or PDF writer is configured; cannot export '{file_name}'.",
    { file_name: &str }
);
define_internal_error!(PdfSaveFailed, "Saving PDF '{file_name}' failed.", { file_name: &str });
