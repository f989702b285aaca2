use crux_core::Command;

use crate::events::{DeviceEvent, Event};
use crate::handle_response;
use crate::http_helpers::{
    build_url, device_endpoint, device_page, download_config_location, handle_request_error,
    process_json_response, process_status_response, send_json_query, upload_config_endpoint,
    JsonMethod, DEVICES_ENDPOINT, DEVICES_PAGE,
};
use crate::model::Model;
use crate::types::{
    CompareSelection, DeviceCreateRequest, DeviceId, FormData, IP_ADDRESS_FIELD, NAME_FIELD,
};
use crate::{BrowserCmd, Effect, HttpCmd};

/// Handle device events (create, upload, download, delete, compare)
pub fn handle(event: DeviceEvent, _model: &mut Model) -> Command<Effect, Event> {
    match event {
        DeviceEvent::AddDevice { form } => {
            let request = DeviceCreateRequest::from_form(&form);
            let mut config = form;
            config.delete(NAME_FIELD);
            config.delete(IP_ADDRESS_FIELD);

            let create = send_json_query(
                JsonMethod::Post,
                DEVICES_ENDPOINT,
                &request,
                move |result| {
                    Event::Device(DeviceEvent::DeviceCreated {
                        result: process_json_response("Create device", result),
                        config,
                    })
                },
            );

            match create {
                Ok(create) => Command::all([BrowserCmd::prevent_default(), create]),
                Err(e) => Command::all([
                    BrowserCmd::prevent_default(),
                    handle_request_error("Create device", e),
                ]),
            }
        }

        DeviceEvent::DeviceCreated { result, config } => {
            handle_response!(result, "Create device", on_success: |device| {
                log::debug!("created device {} ({})", device.id, device.name);
                upload_config(device.id, &config, "Upload device config", |result| {
                    Event::Device(DeviceEvent::NewDeviceConfigUploaded(result))
                })
            })
        }

        DeviceEvent::NewDeviceConfigUploaded(result) => {
            handle_response!(result, "Upload device config", on_success: |_| {
                BrowserCmd::replace(DEVICES_PAGE)
            })
        }

        DeviceEvent::UpdateDeviceConfig { device_id, form } => Command::all([
            BrowserCmd::prevent_default(),
            upload_config(device_id, &form, "Update device config", move |result| {
                Event::Device(DeviceEvent::DeviceConfigUploaded { device_id, result })
            }),
        ]),

        DeviceEvent::DeviceConfigUploaded { device_id, result } => {
            handle_response!(result, "Update device config", on_success: |_| {
                BrowserCmd::replace(device_page(device_id))
            })
        }

        DeviceEvent::DownloadDeviceConfig { device_id } => {
            BrowserCmd::replace(download_config_location(device_id))
        }

        DeviceEvent::DeleteDevice { device_id } => Command::all([
            BrowserCmd::stop_propagation(),
            HttpCmd::delete(build_url(&device_endpoint(device_id)))
                .build()
                .then_send(|result| {
                    Event::Device(DeviceEvent::DeleteDeviceResponse(process_status_response(
                        "Delete device",
                        result,
                    )))
                }),
        ]),

        DeviceEvent::DeleteDeviceResponse(result) => {
            handle_response!(result, "Delete device", on_success: |_| {
                BrowserCmd::replace(DEVICES_PAGE)
            })
        }

        DeviceEvent::CompareConfigs { form } => match CompareSelection::from_form(&form) {
            Some(selection) => Command::all([
                BrowserCmd::prevent_default(),
                BrowserCmd::replace(selection.location()),
            ]),
            None => BrowserCmd::prevent_default(),
        },
    }
}

/// `POST /api/devices/{id}/upload_config` with `form` as multipart body
fn upload_config<F>(
    device_id: DeviceId,
    form: &FormData,
    action: &'static str,
    on_result: F,
) -> Command<Effect, Event>
where
    F: FnOnce(Result<(), String>) -> Event + Send + 'static,
{
    let multipart = match form.to_multipart() {
        Ok(multipart) => multipart,
        Err(e) => return handle_request_error(action, e),
    };

    HttpCmd::post(build_url(&upload_config_endpoint(device_id)))
        .header("Content-Type", multipart.content_type())
        .body_bytes(multipart.body)
        .build()
        .then_send(move |result| on_result(process_status_response(action, result)))
}
