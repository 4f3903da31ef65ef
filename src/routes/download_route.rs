use actix_web::{
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    post, web, HttpResponse,
};
use serde::Deserialize;

use crate::services::CSV_FILE_NAME;

#[derive(Deserialize)]
pub struct DownloadForm {
    pub csv: String,
}

#[post("/download")]
pub async fn download(form: web::Form<DownloadForm>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(CSV_FILE_NAME.to_string())],
        })
        .body(normalize_line_endings(&form.csv))
}

/// Browsers submit textarea content with CRLF line endings; exports use LF.
fn normalize_line_endings(csv: &str) -> String {
    csv.replace("\r\n", "\n")
}

#[cfg(test)]
mod tests {
    use actix_web::{http::header, test, App};

    use super::{download, normalize_line_endings};

    #[actix_web::test]
    async fn download_serves_csv_attachment() {
        let app = test::init_service(App::new().service(download)).await;
        let csv = "Type,Modifier,Query\nQuestions,how,how python works\n";
        let req = test::TestRequest::post()
            .uri("/download")
            .set_form([("csv", csv)])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert!(res.status().is_success());
        assert_eq!(
            res.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/csv"
        );
        let disposition = res
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment"));
        assert!(disposition.contains("autosuggest_results.csv"));

        let body = test::read_body(res).await;
        assert_eq!(body, csv.as_bytes());
    }

    #[actix_web::test]
    async fn download_restores_lf_line_endings() {
        let app = test::init_service(App::new().service(download)).await;
        let req = test::TestRequest::post()
            .uri("/download")
            .set_form([("csv", "Modifier,Query\r\nhow,\"how python, works\"\r\n")])
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "Modifier,Query\nhow,\"how python, works\"\n".as_bytes());
        assert_eq!(normalize_line_endings("a\nb\r\n"), "a\nb\n");
    }
}
