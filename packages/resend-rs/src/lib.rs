// https://resend.com/docs/api-reference/emails/send-email

pub mod models;

use reqwest::Client;

use crate::models::{SendEmailRequest, SendEmailResponse};

const SEND_EMAIL_URL: &str = "https://api.resend.com/emails";

#[derive(Debug, Clone)]
pub struct ResendOptions {
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct ResendService {
    options: ResendOptions,
}

impl ResendService {
    pub fn new(options: ResendOptions) -> Self {
        Self { options }
    }

    pub async fn send_email(
        &self,
        request: &SendEmailRequest,
    ) -> Result<SendEmailResponse, &'static str> {
        let api_key = self.options.api_key.clone();

        let client = Client::new();
        let res = client
            .post(SEND_EMAIL_URL)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await;

        match res {
            Ok(response) => {
                let status = response.status();
                if !status.is_success() {
                    // Log the error response from Resend
                    let error_body = response.text().await.unwrap_or_default();
                    eprintln!("Resend error ({}): {}", status, error_body);
                    return Err("Resend returned an error");
                }

                let result = response.json::<SendEmailResponse>().await;
                match result {
                    Ok(data) => Ok(data),
                    Err(e) => {
                        eprintln!("Failed to parse Resend response: {}", e);
                        Err("Error parsing send response")
                    }
                }
            }
            Err(e) => {
                eprintln!("Request to Resend failed: {}", e);
                Err("Error sending email")
            }
        }
    }
}
