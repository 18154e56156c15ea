/// ERP vendors in priority order. Earlier entries win regardless of where
/// they appear on the page.
pub const ERP_VENDORS: [&str; 5] = ["SAP", "Oracle ERP", "Microsoft Dynamics", "NetSuite", "Infor"];

/// First vendor of `ERP_VENDORS` mentioned anywhere in the text (case-insensitive).
pub fn detect_erp(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    ERP_VENDORS
        .into_iter()
        .find(|vendor| lower.contains(&vendor.to_lowercase()))
}
