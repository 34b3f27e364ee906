use super::*;

#[test]
fn count_property_declaration_is_non_optional() {
    let count = InvokedCountProperty::new("invokedSimplifyNameCount".to_string());

    assert_eq!(count.declaration(), "var invokedSimplifyNameCount = 0");
    assert_eq!(count.ty, "Int");
}

#[test]
fn count_property_implementation_increments() {
    let count = InvokedCountProperty::new("invokedSimplifyNameCount".to_string());

    assert_eq!(count.implementation(), "invokedSimplifyNameCount += 1");
}

#[test]
fn parameter_property_wraps_non_optional_type() {
    let property = ParameterProperty {
        name: "invokedHandleConfigFileResponse".to_string(),
        ty: "ConfigFileResponse".to_string(),
        binding_name: "response".to_string(),
    };

    assert_eq!(
        property.declaration(),
        "var invokedHandleConfigFileResponse: ConfigFileResponse?"
    );
    assert_eq!(
        property.implementation(),
        "invokedHandleConfigFileResponse = response"
    );
}

#[test]
fn optional_parameter_type_is_declared_as_is() {
    let property = ParameterProperty {
        name: "invokedHandleFileResult".to_string(),
        ty: "File?".to_string(),
        binding_name: "result".to_string(),
    };

    assert_eq!(property.declaration(), "var invokedHandleFileResult: File?");
}

#[test]
fn return_property_force_unwraps_non_optional_type() {
    let property = ReturnProperty {
        name: "handleConfigFileDummyValue".to_string(),
        ty: "Int".to_string(),
    };

    assert_eq!(
        property.declaration(),
        "var handleConfigFileDummyValue: Int?"
    );
    assert_eq!(
        property.implementation(),
        "return handleConfigFileDummyValue!"
    );
}

#[test]
fn optional_return_property_reads_plainly() {
    let property = ReturnProperty {
        name: "handleConfigFileDummyValue".to_string(),
        ty: "Int?".to_string(),
    };

    assert_eq!(
        property.declaration(),
        "var handleConfigFileDummyValue: Int?"
    );
    assert_eq!(
        property.implementation(),
        "return handleConfigFileDummyValue"
    );
}
