use ctc_app::{
    OwnerReport, ReportParams, Result, parse_week_start_input, resolve_report_window,
};
use ctc_core::{StoredRecord, week_start_name};

use crate::{
    AppContext, DeletedResponse, RecordsAddRequest, RecordsDeleteRequest, RecordsResponse,
    ReportRequest, ReportResponse, SettingsPutRequest, SettingsResponse,
};

pub fn records_add(
    ctx: &AppContext,
    owner_id: &str,
    req: RecordsAddRequest,
) -> Result<StoredRecord> {
    ctx.app_state.services.records.add(owner_id, &req.record)
}

pub fn records_list(ctx: &AppContext, owner_id: &str) -> Result<RecordsResponse> {
    let records = ctx.app_state.services.records.list(owner_id)?;
    Ok(RecordsResponse { records })
}

pub fn records_delete(
    ctx: &AppContext,
    owner_id: &str,
    req: RecordsDeleteRequest,
) -> Result<DeletedResponse> {
    ctx.app_state.services.records.delete(owner_id, req.id)?;
    Ok(DeletedResponse { deleted: 1 })
}

pub fn report(ctx: &AppContext, owner_id: &str, req: ReportRequest) -> Result<ReportResponse> {
    let resolved = resolve_report_window(&ReportParams {
        window: req.window,
        now: req.now,
    })?;
    let OwnerReport { report, week_start } = ctx
        .app_state
        .services
        .reports
        .report(owner_id, resolved.window, &resolved.now)?;
    Ok(ReportResponse {
        window: resolved.window,
        now: resolved.now.to_rfc3339(),
        week_start: week_start_name(week_start).to_string(),
        flagged: report.flagged_rows().count(),
        report,
    })
}

pub fn settings_get(ctx: &AppContext) -> Result<SettingsResponse> {
    let settings = ctx.app_state.services.settings.get()?;
    Ok(SettingsResponse {
        week_start: week_start_name(settings.week_start).to_string(),
        db_path: ctx.app_state.config.db_path.to_string_lossy().to_string(),
        app_data_dir: ctx.app_data_dir.to_string_lossy().to_string(),
    })
}

pub fn settings_put(ctx: &AppContext, req: SettingsPutRequest) -> Result<SettingsResponse> {
    let week_start = req
        .week_start
        .as_deref()
        .map(parse_week_start_input)
        .transpose()?;
    ctx.app_state.services.settings.update(week_start)?;
    settings_get(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctc_app::AppState;
    use ctc_core::{RecordForm, Weekday};

    fn context(dir: &tempfile::TempDir) -> AppContext {
        let app_state = AppState::new(dir.path().join("api.sqlite"));
        app_state.initialize(Weekday::Mon).expect("initialize");
        AppContext {
            app_state,
            app_data_dir: dir.path().to_path_buf(),
        }
    }

    fn add(ctx: &AppContext, date: &str, input_kg: &str) {
        let record = RecordForm {
            date: date.to_string(),
            input_kg: input_kg.to_string(),
            tea_made_gl: "25".to_string(),
            tea_made_ors: "5".to_string(),
            ctc_hours: "8".to_string(),
            dryer_hours: "6".to_string(),
            heater_hours: "2".to_string(),
            coal_kg: "10".to_string(),
            electricity_units: "50".to_string(),
            mandays: "12".to_string(),
        };
        records_add(ctx, "owner-a", RecordsAddRequest { record }).expect("add");
    }

    #[test]
    fn report_response_carries_window_and_sentinels() {
        let dir = tempfile::tempdir().expect("temp dir");
        let ctx = context(&dir);
        add(&ctx, "2024-06-10", "100");
        add(&ctx, "2024-06-11", "0");

        let response = report(
            &ctx,
            "owner-a",
            ReportRequest {
                window: Some("week".to_string()),
                now: Some("2024-06-12T09:00:00Z".to_string()),
            },
        )
        .expect("report");
        assert_eq!(response.flagged, 0);
        assert_eq!(response.week_start, "monday");

        let json = serde_json::to_value(&response).expect("json");
        assert_eq!(json["window"], "this_week");
        assert_eq!(json["rows"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["rows"][0]["metrics"]["recoveryGL"], 25.0);
        assert_eq!(json["rows"][1]["metrics"]["recoveryGL"], "Infinity");
        assert_eq!(json["chartPoints"][1]["recoveryORS"], "Infinity");
    }

    #[test]
    fn report_rejects_unknown_window() {
        let dir = tempfile::tempdir().expect("temp dir");
        let ctx = context(&dir);
        let err = report(
            &ctx,
            "owner-a",
            ReportRequest {
                window: Some("year".to_string()),
                now: None,
            },
        )
        .expect_err("bad window");
        assert_eq!(err.to_string(), "unsupported window year");
    }

    #[test]
    fn settings_put_updates_week_start() {
        let dir = tempfile::tempdir().expect("temp dir");
        let ctx = context(&dir);
        let response = settings_put(
            &ctx,
            SettingsPutRequest {
                week_start: Some("sunday".to_string()),
            },
        )
        .expect("settings");
        assert_eq!(response.week_start, "sunday");
        assert!(
            settings_put(
                &ctx,
                SettingsPutRequest {
                    week_start: Some("someday".to_string()),
                },
            )
            .is_err()
        );
    }
}
