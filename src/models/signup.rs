use serde::Serialize;

/// Body sent to the remote signup API. Exactly these four keys, nothing
/// from the inbound request leaks through.
#[derive(Serialize, Debug)]
pub struct GatewayPayload<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub mobile_no: &'a str,
}

/// What the gateway answered: status and raw body, success or not.
/// The handler decides what to do with non-200 statuses.
#[derive(Debug)]
pub struct SignupOutcome {
    pub status: u16,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_payload_serializes_exactly_four_keys() {
        let payload = GatewayPayload {
            name: "Ana",
            email: "ana@x.com",
            password: "p",
            mobile_no: "1231231231",
        };

        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(object["name"], "Ana");
        assert_eq!(object["email"], "ana@x.com");
        assert_eq!(object["password"], "p");
        assert_eq!(object["mobile_no"], "1231231231");
    }
}
