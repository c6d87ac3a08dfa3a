//! Contact form delivery.

use crate::error::{Result, check_status};
use crate::http_client;
use folio_core::contact::{ContactForm, ContactStatus};
use reqwest::Client;
use reqwest::multipart::Form;

pub struct ContactClient {
    client: Client,
    endpoint: String,
}

impl ContactClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: http_client()?,
            endpoint: endpoint.into(),
        })
    }

    /// Post the fields as multipart form data. No retry.
    pub async fn submit(&self, form: &ContactForm) -> Result<()> {
        let body = Form::new()
            .text("name", form.name.clone())
            .text("email", form.email.clone())
            .text("message", form.message.clone());

        let response = self.client.post(&self.endpoint).multipart(body).send().await?;
        check_status(response).await?;
        Ok(())
    }

    /// Validate, then deliver; the status is what the visitor sees next
    pub async fn send(&self, form: &ContactForm) -> ContactStatus {
        if let Err(errors) = form.validate() {
            return ContactStatus::Invalid(errors);
        }
        match self.submit(form).await {
            Ok(()) => {
                tracing::info!("Contact message from {} delivered", form.email);
                ContactStatus::Sent
            }
            Err(err) => {
                tracing::warn!("Contact message could not be delivered: {}", err);
                ContactStatus::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::contact::ContactField;
    use wiremock::matchers::{body_string_contains, header_regex, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn form() -> ContactForm {
        ContactForm {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            message: "Let's talk compilers.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_posts_multipart_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/submit"))
            .and(header_regex("content-type", "^multipart/form-data"))
            .and(body_string_contains("name=\"email\""))
            .and(body_string_contains("grace@example.com"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = ContactClient::new(format!("{}/submit", server.uri())).unwrap();
        assert_eq!(client.send(&form()).await, ContactStatus::Sent);
    }

    #[tokio::test]
    async fn test_server_error_is_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let client = ContactClient::new(server.uri()).unwrap();
        let status = client.send(&form()).await;
        assert_eq!(status, ContactStatus::Failed);
        assert_eq!(status.banner(), Some("Something went wrong. Please try again."));
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_sent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = ContactClient::new(server.uri()).unwrap();
        let mut bad = form();
        bad.email = "grace@".to_string();
        let status = client.send(&bad).await;
        assert_eq!(status.field_error(ContactField::Email), Some("Invalid email."));
    }
}
