//! Dashboard metrics and the CSV report ("Baixar").

use crate::messages::{Command, Message};
use crate::metrics::iso_to_display;
use crate::state::AppState;
use crate::toast::ToastKind;

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::MetricsLoaded(metrics) => {
            state.metrics.metrics = metrics.clone();
            state.metrics.loading = false;
            commands.push(Command::Render);
            true
        }
        Message::MetricsFailed(error) => {
            error_log!("Erro ao carregar métricas: {}", error);
            state.metrics.loading = false;
            commands.push(Command::Toast {
                kind: ToastKind::Error,
                text: "Erro ao carregar métricas.".to_string(),
            });
            commands.push(Command::Render);
            true
        }
        Message::SetReportDate(iso) => {
            state.metrics.filter_date = iso_to_display(iso);
            commands.push(Command::Render);
            true
        }
        Message::DownloadReport => {
            if !state.metrics.downloading {
                state.metrics.downloading = true;
                commands.push(Command::DownloadReport);
                commands.push(Command::Render);
            }
            true
        }
        Message::ReportDownloaded => {
            state.metrics.downloading = false;
            commands.push(Command::Render);
            true
        }
        Message::ReportFailed(error) => {
            error_log!("Erro ao baixar relatório: {}", error);
            state.metrics.downloading = false;
            commands.push(Command::Toast {
                kind: ToastKind::Error,
                text: "Erro ao baixar relatório.".to_string(),
            });
            commands.push(Command::Render);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DashboardMetric;
    use crate::reducers::test_support::has;
    use serde_json::json;

    fn metric(date: &str) -> DashboardMetric {
        serde_json::from_value(json!({
            "date": date, "type": "LIVE", "totalViews": 3, "totalComments": 2, "totalShares": 1
        }))
        .unwrap()
    }

    #[test]
    fn date_input_filters_by_display_date() {
        let mut state = AppState::new();
        state.dispatch(Message::MetricsLoaded(vec![
            metric("2024-02-01"),
            metric("2024-02-02"),
        ]));

        state.dispatch(Message::SetReportDate("2024-02-01".into()));
        assert_eq!(state.metrics.filter_date.as_deref(), Some("01/02/2024"));
        let visible = state.metrics.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].display_date(), "01/02/2024");

        state.dispatch(Message::SetReportDate(String::new()));
        assert_eq!(state.metrics.visible().len(), 2);
    }

    #[test]
    fn download_is_not_started_twice() {
        let mut state = AppState::new();
        let first = state.dispatch(Message::DownloadReport);
        let second = state.dispatch(Message::DownloadReport);
        assert!(has(&first, |c| matches!(c, Command::DownloadReport)));
        assert!(!has(&second, |c| matches!(c, Command::DownloadReport)));

        state.dispatch(Message::ReportFailed(crate::errors::ApiError::Network(
            "offline".into(),
        )));
        assert!(!state.metrics.downloading);
    }
}
