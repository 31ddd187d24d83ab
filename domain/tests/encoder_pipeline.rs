//! End-to-end behavior of the encoder through the public API.

use serde_json::{Map, Value, json};
use winconf_domain::{
    DEFAULT_WEB_CONFIG_PATH, EncodedScript, Encoder, EncoderConfig, EncoderError,
    HTTP_PARAMETERS_PATH, SettingDescriptor,
};

fn encoder(settings: Value) -> Encoder {
    let config: EncoderConfig =
        serde_json::from_value(json!({"name": "dotnet", "settings": settings})).unwrap();
    Encoder::new(&config).unwrap()
}

fn object(v: Value) -> Map<String, Value> {
    match v {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

fn text(script: EncodedScript) -> String {
    match script {
        EncodedScript::Text(text) => text,
        EncodedScript::Lines(_) => panic!("expected text output"),
    }
}

/// Describe output as PowerShell prints it, including properties the
/// encoder never reads.
fn realistic_snapshot() -> Value {
    json!({
        "WebConfig": {
            "MACHINE/WEBROOT/APPHOST": {
                "system.webServer/caching": {
                    "enabled": true,
                    "enableKernelCache": false,
                    "maxCacheSize": 0,
                    "maxResponseSize": 262144,
                    "PSPath": "MACHINE/WEBROOT/APPHOST",
                    "Location": "",
                    "ConfigurationPathType": "Location",
                    "ItemXPath": "/system.webServer/caching",
                    "profiles": {"Collection": []}
                }
            },
            "MACHINE/WEBROOT/APPHOST/Default Web Site": {
                "system.webServer/caching": {
                    "enabled": false,
                    "enableKernelCache": true,
                    "maxCacheSize": 512,
                    "maxResponseSize": 1048576,
                    "PSPath": "MACHINE/WEBROOT/APPHOST",
                    "Location": "Default Web Site"
                }
            }
        },
        HTTP_PARAMETERS_PATH: {
            "UriEnableCache": 1,
            "UriScavengerPeriod": 240,
            "PSPath": "Microsoft.PowerShell.Core\\Registry::HKEY_LOCAL_MACHINE\\System\\CurrentControlSet\\Services\\Http\\Parameters",
            "PSChildName": "Parameters",
            "PSProvider": "Microsoft.PowerShell.Core\\Registry"
        }
    })
}

#[test]
fn registry_setting_encode_decode_and_default() {
    let enc = encoder(json!({
        "UriScavengerPeriod": {"min": 10, "max": 20, "step": 5, "default": 10}
    }));

    let script = text(
        enc.encode_multi(object(json!({"UriScavengerPeriod": {"value": 15}})), None)
            .unwrap(),
    );
    assert_eq!(
        script,
        format!(
            "Set-ItemProperty -Path \"{}\" -Name \"UriScavengerPeriod\" -Value 15\n",
            HTTP_PARAMETERS_PATH
        )
    );

    let decoded = enc.decode_multi(Value::String(script)).unwrap();
    assert_eq!(decoded["UriScavengerPeriod"], json!(15));

    let unrelated = enc
        .decode_multi(json!(["Import-Module WebAdministration"]))
        .unwrap();
    assert_eq!(unrelated["UriScavengerPeriod"], json!(10));
}

#[test]
fn range_bounds_and_step_are_enforced() {
    let enc = encoder(json!({
        "UriScavengerPeriod": {"min": 10, "max": 20, "step": 5}
    }));
    for ok in [10, 15, 20] {
        enc.encode_multi(object(json!({"UriScavengerPeriod": ok})), None)
            .unwrap();
    }
    for bad in [5, 25, 12] {
        let err = enc
            .encode_multi(object(json!({"UriScavengerPeriod": bad})), None)
            .unwrap_err();
        assert!(matches!(err, EncoderError::RuntimeValue { .. }), "{bad}");
    }
}

#[test]
fn integer_settings_take_whole_numbers_only() {
    let config = EncoderConfig::new("dotnet").with_setting(
        "WebConfigMaxResponseSize",
        json!({"min": 0, "max": 10, "step": 0.5}),
    );
    let err = Encoder::new(&config).unwrap_err();
    assert!(err.is_config());
    assert_eq!(err.setting(), Some("WebConfigMaxResponseSize"));

    let enc = encoder(json!({"WebConfigMaxResponseSize": {"min": 0, "max": 10, "step": 1}}));
    let err = enc
        .encode_multi(object(json!({"WebConfigMaxResponseSize": 1.5})), None)
        .unwrap_err();
    assert!(matches!(err, EncoderError::RuntimeValue { .. }));

    let script = text(
        enc.encode_multi(object(json!({"WebConfigMaxResponseSize": 4.0})), None)
            .unwrap(),
    );
    assert!(script.ends_with("-Name \"maxResponseSize\" -Value 4\n"));
    let decoded = enc.decode_multi(Value::String(script)).unwrap();
    assert_eq!(decoded["WebConfigMaxResponseSize"], json!(4));
}

#[test]
fn strict_setting_cannot_be_relaxed() {
    let config = EncoderConfig::new("dotnet")
        .with_setting("UriScavengerPeriod", json!({"min": 5}));
    let err = Encoder::new(&config).unwrap_err();
    assert!(err.is_config());

    let config = EncoderConfig::new("dotnet")
        .with_setting("UriScavengerPeriod", json!({"min": 60}));
    assert!(Encoder::new(&config).is_ok());
}

#[test]
fn shared_filter_is_read_once() {
    let enc = encoder(json!({
        "WebConfigCacheEnabled": {},
        "WebConfigEnableKernelCache": {}
    }));
    let script = enc.encode_describe(None).unwrap();
    let read = format!(
        "Get-WebConfiguration -pspath \"{}\" -filter \"system.webServer/caching\"",
        DEFAULT_WEB_CONFIG_PATH
    );
    assert_eq!(script.matches(&read).count(), 1);
    assert!(script.starts_with("Import-Module WebAdministration\n"));
}

#[test]
fn config_list_round_trips_through_snapshot() {
    let enc = encoder(json!({
        "WebConfig": {},
        "WebConfigCacheEnabled": {},
        "WebConfigEnableKernelCache": {},
        "WebConfigMaxCacheSize": {},
        "WebConfigMaxResponseSize": {}
    }));
    let records = json!([
        {"path": "MACHINE/WEBROOT/APPHOST", "values": {
            "WebConfigCacheEnabled": 1, "WebConfigEnableKernelCache": 0,
            "WebConfigMaxCacheSize": 0, "WebConfigMaxResponseSize": 262144
        }},
        {"path": "MACHINE/WEBROOT/APPHOST/Default Web Site", "values": {
            "WebConfigCacheEnabled": 0, "WebConfigEnableKernelCache": 1,
            "WebConfigMaxCacheSize": 512, "WebConfigMaxResponseSize": 1048576
        }}
    ]);

    let script = text(
        enc.encode_multi(object(json!({"WebConfig": {"value": records.clone()}})), None)
            .unwrap(),
    );
    assert_eq!(script.matches("Import-Module WebAdministration").count(), 1);
    assert_eq!(script.lines().count(), 9);

    // The snapshot IIS would report after applying the script
    let snapshot = realistic_snapshot();
    let decoded = enc.decode_multi(snapshot).unwrap();
    assert_eq!(decoded["WebConfig"], records);

    // The applied script decodes to the same records
    let from_script = enc.decode_multi(Value::String(script)).unwrap();
    assert_eq!(from_script["WebConfig"], records);
}

#[test]
fn every_accepted_script_decodes_unambiguously() {
    let enc = encoder(json!({"WebConfig": {}, "WebConfigCacheEnabled": {}}));

    let repeated = json!([
        {"path": "P", "values": {"WebConfigCacheEnabled": 0}},
        {"path": "P", "values": {"WebConfigCacheEnabled": 1}}
    ]);
    let err = enc
        .encode_multi(object(json!({"WebConfig": repeated})), None)
        .unwrap_err();
    assert!(matches!(err, EncoderError::EncoderRuntime(_)));

    let overlapping = json!({
        "WebConfigCacheEnabled": 1,
        "WebConfig": [{"path": DEFAULT_WEB_CONFIG_PATH, "values": {"WebConfigCacheEnabled": 0}}]
    });
    let err = enc.encode_multi(object(overlapping), None).unwrap_err();
    assert!(matches!(err, EncoderError::EncoderRuntime(_)));

    let records = json!([
        {"path": "P", "values": {"WebConfigCacheEnabled": 0}},
        {"path": "Q", "values": {"WebConfigCacheEnabled": 1}}
    ]);
    let script = text(
        enc.encode_multi(object(json!({"WebConfig": records.clone()})), None)
            .unwrap(),
    );
    let decoded = enc.decode_multi(Value::String(script)).unwrap();
    assert_eq!(decoded["WebConfig"], records);
}

#[test]
fn realistic_snapshot_decodes_every_setting() {
    let enc = encoder(json!({
        "UriEnableCache": {},
        "UriScavengerPeriod": {},
        "WebConfigCacheEnabled": {},
        "WebConfigMaxResponseSize": {}
    }));
    let decoded = enc.decode_multi(realistic_snapshot()).unwrap();
    assert_eq!(decoded["UriEnableCache"], json!(1));
    assert_eq!(decoded["UriScavengerPeriod"], json!(240));
    assert_eq!(decoded["WebConfigCacheEnabled"], json!(1));
    assert_eq!(decoded["WebConfigMaxResponseSize"], json!(262144));
}

#[test]
fn leftover_values_fail_without_output() {
    let enc = encoder(json!({"UriEnableCache": {}}));
    let err = enc
        .encode_multi(
            object(json!({"UriEnableCache": 1, "UriMaxUriBytes": 4096})),
            None,
        )
        .unwrap_err();
    assert!(matches!(err, EncoderError::EncoderRuntime(ref m) if m.contains("UriMaxUriBytes")));
}

#[test]
fn describe_with_context_mirrors_encode_input() {
    let enc = encoder(json!({
        "UriEnableCache": {},
        "WebConfig": {},
        "WebConfigMaxCacheSize": {"max": 1024}
    }));
    let adjust = json!({"WebConfig": {"value": [{"path": "MACHINE/WEBROOT/APPHOST/Site"}]}});
    let described = enc.describe(Some(&adjust)).unwrap();

    assert!(matches!(described["UriEnableCache"], SettingDescriptor::Bool(_)));
    let SettingDescriptor::ConfigList(list) = &described["WebConfig"] else {
        panic!("expected a config list descriptor");
    };
    let paths = list.paths.as_ref().unwrap();
    let site = &paths["MACHINE/WEBROOT/APPHOST/Site"];
    let max = site["WebConfigMaxCacheSize"].as_range().unwrap().max;
    assert_eq!(max, winconf_domain::Number::Int(1024));

    let json = serde_json::to_value(&described["UriEnableCache"]).unwrap();
    assert_eq!(json["kind"], "bool");
    assert_eq!(json["max"], 1);
}
