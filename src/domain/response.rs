/// Account balance returned by `GET /sms/balance`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balance {
    pub success: bool,
    /// Balance amount exactly as Reach formatted it (e.g. `"10.00"`).
    pub balance: Option<String>,
    pub description: String,
}

impl Balance {
    pub fn is_success(&self) -> bool {
        self.success
    }
}

/// Delivery status record returned by `GET /sms/message/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageDetails {
    pub method: String,
    pub to: String,
    pub originator: String,
    pub text: String,
    pub sent_date: String,
    pub status: String,
    pub delivered_date: String,
    /// Carrier delivery receipt (DLR) code.
    pub dlr_code: String,
    pub description: String,
    pub reference: String,
    pub success: bool,
}

impl MessageDetails {
    pub fn is_success(&self) -> bool {
        self.success
    }
}

/// One entry of the `POST /sms/message` response.
///
/// Reach returns a sequence of these; each entry carries its own success flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResult {
    pub success: bool,
    pub id: Option<String>,
    pub description: String,
}

impl SendResult {
    pub fn is_success(&self) -> bool {
        self.success
    }
}
