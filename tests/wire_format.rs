use serde_json::{Value, json};

use cube_swipe::{Cube, CubeService, FaceDirection, RotateRequest, ServiceResult, Swipe};

#[test]
fn generated_cells_carry_sentinel_for_caps() {
    let cube = CubeService::default().generate(3).unwrap();
    let json = serde_json::to_value(&cube).unwrap();

    let front = &json["faces"][0];
    assert_eq!(front["direction"], "Front");
    assert_eq!(
        front["cells"][0],
        json!({ "row": 0, "col": 0, "color": "Green", "axisA": 0, "axisB": -1, "axisC": 2 })
    );

    let right = &json["faces"][1];
    assert_eq!(right["direction"], "Right");
    assert_eq!(
        right["cells"][0],
        json!({ "row": 0, "col": 0, "color": "Red", "axisA": 3, "axisB": 2, "axisC": -1 })
    );
}

#[test]
fn cube_survives_json_round_trip() {
    let cube = CubeService::default().generate(5).unwrap();
    let text = serde_json::to_string(&cube).unwrap();
    let parsed: Cube = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, cube);
}

#[test]
fn rotate_request_accepts_legacy_field_names() {
    let cube = CubeService::default().generate(3).unwrap();
    let mut faces = serde_json::to_value(&cube.faces).unwrap();

    // Rename every cell field to the names older clients send
    for face in faces.as_array_mut().unwrap() {
        for cell in face["cells"].as_array_mut().unwrap() {
            let object = cell.as_object_mut().unwrap();
            for (new, old) in [
                ("col", "column"),
                ("axisA", "firstRotationNumber"),
                ("axisB", "secondRotationNumber"),
                ("axisC", "thirdRotationNumber"),
            ] {
                let value = object.remove(new).unwrap();
                object.insert(old.to_string(), value);
            }
        }
    }
    let pivot = faces[0]["cells"][0].clone();

    let legacy = json!({
        "cubeData": faces,
        "length": 3,
        "cell": pivot,
        "startSwipeDirection": "Front",
        "endSwipeDirection": "Right",
    });
    let request: RotateRequest = serde_json::from_value(legacy).unwrap();

    let front = *cube.face(FaceDirection::Front).unwrap().cell_at(0, 0).unwrap();
    let expected = RotateRequest::new(cube, 3, front, Swipe::new(FaceDirection::Front, FaceDirection::Right));
    assert_eq!(request, expected);
}

#[test]
fn rotate_request_uses_camel_case() {
    let cube = CubeService::default().generate(3).unwrap();
    let pivot = cube.faces[0].cells[4];
    let request = RotateRequest::new(cube, 3, pivot, Swipe::new(FaceDirection::Up, FaceDirection::Left));
    let json = serde_json::to_value(&request).unwrap();

    let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    for key in ["cubeData", "length", "pivotCell", "startDirection", "endDirection"] {
        assert!(keys.contains(&key), "missing {}", key);
    }
    assert_eq!(json["startDirection"], "Up");
}

#[test]
fn coordinates_below_sentinel_are_rejected() {
    let text = r#"{ "row": 0, "col": 0, "color": "Blue", "axisA": -2, "axisB": 1, "axisC": -1 }"#;
    assert!(serde_json::from_str::<cube_swipe::Cell>(text).is_err());
}

#[test]
fn service_envelope_wraps_rotate_outcome() {
    let service = CubeService::default();
    let cube = service.generate(3).unwrap();
    let pivot = cube.faces[0].cells[0];

    let bad = RotateRequest::new(cube.clone(), 3, pivot, Swipe::new(FaceDirection::Up, FaceDirection::Down));
    let envelope = ServiceResult::from(service.rotate(bad));
    let json: Value = serde_json::to_value(&envelope).unwrap();
    assert_eq!(json["isSuccessful"], false);
    assert!(json.get("value").is_none());
    assert!(json["error"].as_str().unwrap().contains("Up"));

    let good = RotateRequest::new(cube, 3, pivot, Swipe::new(FaceDirection::Front, FaceDirection::Right));
    let envelope = ServiceResult::from(service.rotate(good));
    assert!(envelope.is_successful);
    assert_eq!(envelope.value.unwrap().faces.len(), 6);
}
