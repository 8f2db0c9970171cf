use domain::order::OrderRequest;

pub struct EmailTemplate;

impl EmailTemplate {
    pub fn order_request_subject(order: &OrderRequest) -> String {
        format!("New order request: {}", order.art_piece_name)
    }

    pub fn order_request_console(recipient_email: &str, order: &OrderRequest) -> String {
        format!(
            r"=== ORDER REQUEST ===
To: {}
Subject: {}

Piece: {}
From: {} <{}>

{}
=== END EMAIL ===",
            recipient_email,
            Self::order_request_subject(order),
            order.art_piece_name,
            order.customer_name,
            order.customer_email,
            order.message.as_deref().unwrap_or("(no message)"),
        )
    }

    pub fn order_request_html(order: &OrderRequest) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>New order request</title>
    <style>
        body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px; }}
        .header {{ background-color: #f4f4f4; padding: 20px; text-align: center; border-radius: 5px; }}
        .detail {{ margin: 8px 0; }}
        .message {{ background-color: #fafafa; border-left: 3px solid #ccc; padding: 12px; margin-top: 16px; white-space: pre-wrap; }}
        .footer {{ margin-top: 30px; padding-top: 20px; border-top: 1px solid #eee; font-size: 0.9em; color: #666; }}
    </style>
</head>
<body>
    <div class="header">
        <h1>New order request</h1>
    </div>

    <div class="content">
        <p class="detail"><strong>Piece:</strong> {}</p>
        <p class="detail"><strong>Name:</strong> {}</p>
        <p class="detail"><strong>Email:</strong> {}</p>
        <div class="message">{}</div>
    </div>

    <div class="footer">
        <p>Sent automatically from the portfolio order form. Reply directly to the customer's address.</p>
    </div>
</body>
</html>"#,
            order.art_piece_name,
            order.customer_name,
            order.customer_email,
            order.message.as_deref().unwrap_or("(no message)"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> OrderRequest {
        OrderRequest {
            customer_name: "Anna".to_string(),
            customer_email: "anna@example.com".to_string(),
            message: Some("Is it framed?".to_string()),
            art_piece_name: "Harbor Dusk".to_string(),
        }
    }

    #[test]
    fn templates_carry_all_order_fields() {
        let console = EmailTemplate::order_request_console("artist@example.com", &order());
        for fragment in ["Harbor Dusk", "Anna", "anna@example.com", "Is it framed?"] {
            assert!(console.contains(fragment), "console missing {fragment}");
        }

        let html = EmailTemplate::order_request_html(&order());
        for fragment in ["Harbor Dusk", "Anna", "anna@example.com", "Is it framed?"] {
            assert!(html.contains(fragment), "html missing {fragment}");
        }
    }

    #[test]
    fn missing_message_has_placeholder() {
        let mut o = order();
        o.message = None;
        assert!(EmailTemplate::order_request_html(&o).contains("(no message)"));
    }
}
