mod common;

use common::{empty_response, json_response, response_with_body, serve_once, serve_script};
use ssm_client::{
    CommandStatus, CreateAssociationRequest, CreateDocumentRequest, GetParameterRequest,
    ParameterTier, ParameterType, PutParameterRequest, SendCommandRequest, Target,
};
use ssm_client::SsmClient;

#[test]
fn put_then_get_parameter_round_trip() {
    let responses = vec![
        json_response("200 OK", r#"{"Version":3,"Tier":"Standard"}"#),
        json_response(
            "200 OK",
            r#"{"Parameter":{"Name":"/app/db-password","Type":"SecureString","Value":"hunter2","Version":3}}"#,
        ),
    ];
    let (base_url, rx, handle) = serve_script(responses);
    let client = SsmClient::builder(&base_url)
        .expect("builder")
        .build()
        .expect("build");

    let put = client
        .put_parameter(
            &PutParameterRequest::default()
                .with_name("/app/db-password")
                .with_value("hunter2")
                .with_type(ParameterType::SecureString)
                .with_tier(ParameterTier::Standard)
                .with_overwrite(true),
        )
        .expect("put");
    assert_eq!(put.version, Some(3));

    let get = client
        .get_parameter(
            &GetParameterRequest::default()
                .with_name("/app/db-password")
                .with_with_decryption(true),
        )
        .expect("get");
    let parameter = get.parameter.expect("parameter");
    assert_eq!(parameter.value.as_deref(), Some("hunter2"));
    assert_eq!(parameter.parameter_type(), Some(Ok(ParameterType::SecureString)));

    let put_req = rx.recv().expect("put request");
    assert_eq!(
        put_req.header_value("x-amz-target"),
        Some("AmazonSSM.PutParameter")
    );
    let put_body = put_req.body_json();
    assert_eq!(put_body["Name"], "/app/db-password");
    assert_eq!(put_body["Type"], "SecureString");
    assert_eq!(put_body["Overwrite"], true);

    let get_req = rx.recv().expect("get request");
    assert_eq!(
        get_req.header_value("x-amz-target"),
        Some("AmazonSSM.GetParameter")
    );
    assert_eq!(get_req.body_json()["WithDecryption"], true);

    handle.join().expect("server");
}

#[test]
fn send_command_serializes_parameters_map() {
    let body = r#"{"Command":{"CommandId":"cmd-42","DocumentName":"AWS-RunShellScript","Status":"Pending","InstanceIds":["i-1","i-2"]}}"#;
    let (base_url, rx, handle) = serve_once(json_response("200 OK", body));
    let client = SsmClient::builder(&base_url)
        .expect("builder")
        .build()
        .expect("build");

    let request = SendCommandRequest::default()
        .with_document_name("AWS-RunShellScript")
        .with_instance_ids(["i-1"])
        .with_instance_ids(["i-2"])
        .add_parameters_entry("commands", vec!["uptime".to_string()])
        .expect("parameters")
        .with_comment("health check");
    let result = client.send_command(&request).expect("send");
    let command = result.command.expect("command");
    assert_eq!(command.command_id.as_deref(), Some("cmd-42"));
    assert_eq!(command.command_status(), Some(Ok(CommandStatus::Pending)));

    let req = rx.recv().expect("request");
    let sent = req.body_json();
    assert_eq!(sent["DocumentName"], "AWS-RunShellScript");
    assert_eq!(sent["InstanceIds"][0], "i-1");
    assert_eq!(sent["InstanceIds"][1], "i-2");
    assert_eq!(sent["Parameters"]["commands"][0], "uptime");
    assert_eq!(sent["Comment"], "health check");

    handle.join().expect("server");
}

#[test]
fn create_association_sends_targets() {
    let body = r#"{"AssociationDescription":{"AssociationId":"assoc-1","Name":"AWS-GatherSoftwareInventory"}}"#;
    let (base_url, rx, handle) = serve_once(json_response("200 OK", body));
    let client = SsmClient::builder(&base_url)
        .expect("builder")
        .build()
        .expect("build");

    let result = client
        .create_association(
            &CreateAssociationRequest::default()
                .with_name("AWS-GatherSoftwareInventory")
                .with_targets([Target::default()
                    .with_key("tag:env")
                    .with_values(["prod"])])
                .with_schedule_expression("rate(30 minutes)"),
        )
        .expect("create");
    let description = result.association_description.expect("description");
    assert_eq!(description.association_id.as_deref(), Some("assoc-1"));

    let req = rx.recv().expect("request");
    let sent = req.body_json();
    assert_eq!(sent["Targets"][0]["Key"], "tag:env");
    assert_eq!(sent["Targets"][0]["Values"][0], "prod");
    assert_eq!(sent["ScheduleExpression"], "rate(30 minutes)");

    handle.join().expect("server");
}

#[test]
fn duplicate_document_error_carries_code_and_request_id() {
    let body = r#"{"__type":"com.amazonaws.ssm#DocumentAlreadyExists","message":"The specified document already exists."}"#;
    let response = response_with_body(
        "400 Bad Request",
        &[
            ("Content-Type", "application/x-amz-json-1.1"),
            ("x-amzn-RequestId", "11aa-22bb"),
        ],
        body,
    );
    let (base_url, _rx, handle) = serve_once(response);
    let client = SsmClient::builder(&base_url)
        .expect("builder")
        .build()
        .expect("build");

    let err = client
        .create_document(
            &CreateDocumentRequest::default()
                .with_name("my-doc")
                .with_content("{}")
                .with_document_type("Command"),
        )
        .expect_err("conflict");
    let service = err.as_service_error().expect("api error");
    assert_eq!(service.code, 400);
    assert!(service.is_code("DocumentAlreadyExists"));
    assert_eq!(service.request_id.as_deref(), Some("11aa-22bb"));

    handle.join().expect("server");
}

#[test]
fn empty_body_result_decodes_for_operations_without_members() {
    let (base_url, rx, handle) = serve_once(empty_response("200 OK"));
    let client = SsmClient::builder(&base_url)
        .expect("builder")
        .build()
        .expect("build");

    client
        .update_service_setting(
            &ssm_client::UpdateServiceSettingRequest::default()
                .with_setting_id("/ssm/parameter-store/high-throughput-enabled")
                .with_setting_value("true"),
        )
        .expect("update");

    let req = rx.recv().expect("request");
    assert_eq!(
        req.header_value("x-amz-target"),
        Some("AmazonSSM.UpdateServiceSetting")
    );

    handle.join().expect("server");
}
