//! Recipient creation: form validation and the optional follow-up parcel.

use api::{NewRecipient, ParcelService, Recipient};

use super::required;

pub const NAME_REQUIRED: &str = "Name is required";
pub const ADDRESS_REQUIRED: &str = "Address is required";

/// Raw form input as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipientForm {
    pub name: String,
    pub address: String,
}

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipientFormErrors {
    pub name: Option<&'static str>,
    pub address: Option<&'static str>,
}

impl RecipientForm {
    /// Build the request body, or report every missing field at once.
    pub fn validate(&self) -> Result<NewRecipient, RecipientFormErrors> {
        let name = required(&self.name, NAME_REQUIRED);
        let address = required(&self.address, ADDRESS_REQUIRED);
        match (name, address) {
            (Ok(name), Ok(address)) => Ok(NewRecipient { name, address }),
            (name, address) => Err(RecipientFormErrors {
                name: name.err(),
                address: address.err(),
            }),
        }
    }
}

/// Submit a validated form. Failures are logged and returned as display text.
pub async fn create_recipient<S: ParcelService>(
    service: &S,
    recipient: &NewRecipient,
) -> Result<Recipient, String> {
    service.create_recipient(recipient).await.map_err(|e| {
        tracing::error!("Failed to create recipient: {}", e);
        e.to_string()
    })
}

/// Create the parcel offered after a successful registration.
///
/// Returns the new tracking number, or `None` (already logged) when the
/// server refused.
pub async fn create_follow_up_parcel<S: ParcelService>(
    service: &S,
    recipient: &Recipient,
) -> Option<String> {
    match service.create_parcel(&recipient.id).await {
        Ok(parcel) => Some(parcel.track_number),
        Err(e) => {
            tracing::error!("Failed to create parcel for recipient {}: {}", recipient.id, e);
            None
        }
    }
}

/// How the "add a parcel?" dialog was closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowUpChoice {
    AddParcel,
    Dismiss,
}

/// Close the follow-up dialog.
///
/// The form is cleared on every path. The returned tracking number, if any,
/// is where the app navigates next.
pub async fn close_follow_up<S: ParcelService>(
    service: &S,
    form: &mut RecipientForm,
    recipient: &Recipient,
    choice: FollowUpChoice,
) -> Option<String> {
    let track_number = match choice {
        FollowUpChoice::AddParcel => create_follow_up_parcel(service, recipient).await,
        FollowUpChoice::Dismiss => None,
    };
    *form = RecipientForm::default();
    track_number
}
