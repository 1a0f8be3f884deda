//! tests/dispatch_tests.rs
//! Pruebas del recorrido de envío sobre una hoja en memoria.

#[cfg(test)]
mod tests {
    use crate::config::sheet_config::{HeaderLabels, SheetConfig};
    use crate::error::DispatchError;
    use crate::models::run_model::RunResult;
    use crate::services::dispatch_service::DispatchService;
    use crate::tests::support::{
        candidate, profile, row, FakeResolver, MemorySheet, RecordingTransport,
    };

    async fn run(
        sheet: &mut MemorySheet,
        resolver: &FakeResolver,
        transport: &RecordingTransport,
    ) -> Result<RunResult, DispatchError> {
        let profile = profile();
        let config = SheetConfig::default();
        DispatchService::new(&profile, &config, resolver, transport)
            .run(sheet)
            .await
    }

    #[tokio::test]
    async fn test_single_row_is_sent() {
        let mut sheet = MemorySheet::with_rows(vec![candidate("Alice", "a@x.com", "")]);
        let resolver = FakeResolver::default();
        let transport = RecordingTransport::default();

        let result = run(&mut sheet, &resolver, &transport).await.unwrap();

        assert_eq!(
            result,
            RunResult {
                succeeded: 1,
                skipped: 0,
                failed: 0
            }
        );
        assert_eq!(sheet.status(1), "SENT");
        assert_eq!(*resolver.calls.lock().unwrap(), vec!["file123".to_string()]);

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let mail = &sent[0];
        assert_eq!(mail.to, "a@x.com");
        assert_eq!(mail.subject, "【Acme】カジュアル面談のお礼 & Studio1の体験予約について");
        assert_eq!(mail.sender.from_alias, "hr@acme.test");
        assert_eq!(mail.sender.display_name, "Acme 採用担当");
        assert_eq!(mail.sender.reply_to, "jobs@acme.test");
        assert_eq!(mail.attachments.len(), 1);
        assert_eq!(mail.attachments[0].filename, "file123.pdf");
    }

    #[tokio::test]
    async fn test_sent_row_is_skipped_without_calls() {
        let mut sheet = MemorySheet::with_rows(vec![candidate("Alice", "a@x.com", "SENT")]);
        let resolver = FakeResolver::default();
        let transport = RecordingTransport::default();

        let result = run(&mut sheet, &resolver, &transport).await.unwrap();

        assert_eq!(result.skipped, 1);
        assert_eq!(result.succeeded, 0);
        assert_eq!(transport.attempt_count(), 0);
        assert!(resolver.calls.lock().unwrap().is_empty());
        assert!(sheet.writes.is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_is_recorded_on_row() {
        let mut sheet = MemorySheet::with_rows(vec![candidate("Alice", "a@x.com", "")]);
        let resolver = FakeResolver::default();
        let transport = RecordingTransport::failing_for("a@x.com", "quota exceeded");

        let result = run(&mut sheet, &resolver, &transport).await.unwrap();

        assert_eq!(result.failed, 1);
        assert_eq!(result.succeeded, 0);
        assert_eq!(sheet.status(1), "ERROR: quota exceeded");
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_following_rows() {
        let mut sheet = MemorySheet::with_rows(vec![
            candidate("Alice", "a@x.com", ""),
            candidate("Carol", "c@x.com", ""),
            candidate("Dave", "d@x.com", ""),
        ]);
        let resolver = FakeResolver::default();
        let transport = RecordingTransport::failing_for("c@x.com", "mailbox unavailable");

        let result = run(&mut sheet, &resolver, &transport).await.unwrap();

        assert_eq!(result.succeeded, 2);
        assert_eq!(result.failed, 1);
        assert_eq!(sheet.status(1), "SENT");
        assert_eq!(sheet.status(2), "ERROR: mailbox unavailable");
        assert_eq!(sheet.status(3), "SENT");
        // un único write por fila y en orden físico
        let rows: Vec<usize> = sheet.writes.iter().map(|(r, _, _)| *r).collect();
        assert_eq!(rows, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_missing_attachment_is_row_error() {
        let mut sheet = MemorySheet::with_rows(vec![candidate("Alice", "a@x.com", "")]);
        let resolver = FakeResolver {
            missing: vec!["file123".to_string()],
            ..Default::default()
        };
        let transport = RecordingTransport::default();

        let result = run(&mut sheet, &resolver, &transport).await.unwrap();

        assert_eq!(result.failed, 1);
        assert_eq!(sheet.status(1), "ERROR: attachment not found: file123");
        assert_eq!(transport.attempt_count(), 0);
    }

    #[tokio::test]
    async fn test_rows_without_name_or_email_are_left_untouched() {
        let mut sheet = MemorySheet::with_rows(vec![
            candidate("Alice", "", ""),
            candidate("", "b@x.com", ""),
            row(&["", "", "", "", "", "", ""]),
            row(&["Eve"]),
        ]);
        let before = sheet.rows.clone();
        let resolver = FakeResolver::default();
        let transport = RecordingTransport::default();

        let result = run(&mut sheet, &resolver, &transport).await.unwrap();

        assert_eq!(result, RunResult::default());
        assert_eq!(transport.attempt_count(), 0);
        assert!(sheet.writes.is_empty());
        assert_eq!(sheet.rows, before);
    }

    #[tokio::test]
    async fn test_missing_header_processes_nothing() {
        let mut sheet = MemorySheet::with_rows(vec![candidate("Alice", "a@x.com", "")]);
        sheet.rows[0][5] = "PDF_ID".to_string();
        let resolver = FakeResolver::default();
        let transport = RecordingTransport::default();

        let err = run(&mut sheet, &resolver, &transport).await.unwrap_err();

        assert!(matches!(err, DispatchError::MissingColumn(ref l) if l == "ATTACHMENT_ID"));
        assert!(sheet.writes.is_empty());
        assert_eq!(transport.attempt_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_sheet_is_fatal() {
        let mut sheet = MemorySheet::default();
        let resolver = FakeResolver::default();
        let transport = RecordingTransport::default();

        let err = run(&mut sheet, &resolver, &transport).await.unwrap_err();
        assert!(matches!(err, DispatchError::EmptySheet));
    }

    #[tokio::test]
    async fn test_header_only_sheet_is_a_noop() {
        let mut sheet = MemorySheet::with_rows(vec![]);
        let resolver = FakeResolver::default();
        let transport = RecordingTransport::default();

        let result = run(&mut sheet, &resolver, &transport).await.unwrap();
        assert_eq!(result, RunResult::default());
    }

    #[tokio::test]
    async fn test_second_run_only_retries_unsent_rows() {
        let mut sheet = MemorySheet::with_rows(vec![
            candidate("Alice", "a@x.com", ""),
            candidate("Carol", "c@x.com", ""),
        ]);
        let resolver = FakeResolver::default();
        let transport = RecordingTransport::failing_for("c@x.com", "quota exceeded");

        let first = run(&mut sheet, &resolver, &transport).await.unwrap();
        let second = run(&mut sheet, &resolver, &transport).await.unwrap();

        assert_eq!(
            first,
            RunResult {
                succeeded: 1,
                skipped: 0,
                failed: 1
            }
        );
        assert_eq!(
            second,
            RunResult {
                succeeded: 0,
                skipped: 1,
                failed: 1
            }
        );
        // Alice recibió un solo correo
        assert_eq!(transport.sent_to(), vec!["a@x.com".to_string()]);
        assert_eq!(sheet.status(2), "ERROR: quota exceeded");
    }

    #[tokio::test]
    async fn test_error_row_is_retried_and_overwritten() {
        let mut sheet =
            MemorySheet::with_rows(vec![candidate("Alice", "a@x.com", "ERROR: quota exceeded")]);
        let resolver = FakeResolver::default();
        let transport = RecordingTransport::default();

        let result = run(&mut sheet, &resolver, &transport).await.unwrap();

        assert_eq!(result.succeeded, 1);
        assert_eq!(sheet.status(1), "SENT");
    }

    #[tokio::test]
    async fn test_sentinel_match_is_exact() {
        let mut sheet = MemorySheet::with_rows(vec![
            candidate("Alice", "a@x.com", "sent"),
            candidate("Carol", "c@x.com", "SENT "),
        ]);
        let resolver = FakeResolver::default();
        let transport = RecordingTransport::default();

        let result = run(&mut sheet, &resolver, &transport).await.unwrap();

        assert_eq!(result.skipped, 0);
        assert_eq!(result.succeeded, 2);
    }

    #[tokio::test]
    async fn test_short_row_gets_status_cell() {
        let mut sheet = MemorySheet::with_rows(vec![row(&[
            "Alice", "a@x.com", "http://b", "Bob", "Studio1", "file123",
        ])]);
        let resolver = FakeResolver::default();
        let transport = RecordingTransport::default();

        let result = run(&mut sheet, &resolver, &transport).await.unwrap();

        assert_eq!(result.succeeded, 1);
        assert_eq!(sheet.rows[1].len(), 7);
        assert_eq!(sheet.status(1), "SENT");
    }

    #[tokio::test]
    async fn test_status_write_failure_aborts_run() {
        let mut sheet = MemorySheet::with_rows(vec![
            candidate("Alice", "a@x.com", ""),
            candidate("Carol", "c@x.com", ""),
        ]);
        sheet.fail_writes = true;
        let resolver = FakeResolver::default();
        let transport = RecordingTransport::default();

        let err = run(&mut sheet, &resolver, &transport).await.unwrap_err();

        assert!(matches!(err, DispatchError::StatusWrite { row: 1, .. }));
        assert_eq!(transport.sent_to(), vec!["a@x.com".to_string()]);
    }

    #[tokio::test]
    async fn test_custom_labels_and_markers() {
        let config = SheetConfig {
            headers: HeaderLabels {
                name: "名前".to_string(),
                email: "メールアドレス".to_string(),
                booking_url: "予約URL".to_string(),
                recruiter: "担当者".to_string(),
                studio_name: "スタジオ名".to_string(),
                attachment_id: "添付ファイルID".to_string(),
                status: "送信ステータス".to_string(),
            },
            sent_marker: "送信済".to_string(),
            error_prefix: "エラー: ".to_string(),
        };
        let mut sheet = MemorySheet {
            rows: vec![
                row(&[
                    "送信ステータス",
                    "名前",
                    "メールアドレス",
                    "予約URL",
                    "担当者",
                    "スタジオ名",
                    "添付ファイルID",
                ]),
                row(&["", "Alice", "a@x.com", "http://b", "Bob", "Studio1", "file123"]),
                row(&["送信済", "Carol", "c@x.com", "http://b", "Bob", "Studio1", "file123"]),
                row(&["", "Dave", "d@x.com", "http://b", "Bob", "Studio1", "file123"]),
            ],
            ..Default::default()
        };
        let profile = profile();
        let resolver = FakeResolver::default();
        let transport = RecordingTransport::failing_for("d@x.com", "quota exceeded");

        let result = DispatchService::new(&profile, &config, &resolver, &transport)
            .run(&mut sheet)
            .await
            .unwrap();

        assert_eq!(
            result,
            RunResult {
                succeeded: 1,
                skipped: 1,
                failed: 1
            }
        );
        assert_eq!(sheet.rows[1][0], "送信済");
        assert_eq!(sheet.rows[3][0], "エラー: quota exceeded");
    }
}
