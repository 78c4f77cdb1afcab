//! Scanner constants and configuration
//!
//! Default exclusion data for both checks and the two match patterns.

/// Copyright notice line: "copyright", optional "(c)", optional year range,
/// holder name.
pub const HEADER_PATTERN: &str = r"(C|c)opyright (\((c|C)\) )?(20(0|1|2)([0-9])-)?(20(0|1|2)([0-9]),)*20(0|1|2)([0-9])(,)? ([a-z]|[A-Z]|[0-9]| )*";

/// Unsafe standard-library calls, each followed by its opening parenthesis
pub const FORBIDDEN_FUNCTIONS_PATTERN: &str = r"setjmp\(|longjmp\(|getwd\(|strlen\(|wcslen\(|gets\(|strcpy\(|wcscpy\(|strcat\(|wcscat\(|sprintf\(|vsprintf\(|asctime\(";

/// Path fragments skipped by the header check
pub const HEADER_EXCLUDE_FILES: &[&str] = &[
    // Tooling and VCS
    ".user.bazelrc",
    ".bandit",
    ".dockerignore",
    ".git",
    ".pytest_cache",
    ".venv",
    "__pycache__",
    "bazel-",
    ".bazelversion",
    "clang-format",

    // Binary, data and document formats
    ".bin",
    ".groovy",
    ".jpeg",
    ".jpg",
    ".json",
    ".md",
    ".npy",
    ".pdf",
    ".png",
    ".proto",
    ".svg",
    ".tar.gz",
    ".wav",
    ".log",
    ".xml",
    "docx",
    "gif",
    "saved_model.pb",
    "tflite",

    // Generated or third-party files
    "Doxyfile",
    "LICENSE",
    "REST_age_gender.ipynb",
    "rag_demo.ipynb",
    "genhtml",
    "cppclean_src",
    "cppclean_test",
    "dummy.xml",
    "index.html",
    "third_party/python/BUILD",
    "libevent/BUILD",
    "ovms-c/dist",
    "go.sum",
    "yarn.lock",
    "BUILD.bazel",
    "package.json",
    "internal_tests",
    "lib_custom_nodes_files",

    // Patches
    "abseil_gcc_8.5_constant_expression.patch",
    "azure_sdk.patch",
    "cb.patch",
    "listen.patch",
    "net_http.patch",
    "partial.patch",
    "ovms_drogon_trantor.patch",
    "rest_sdk_v2.10.16.patch",
    "tf.patch",
    "tf_graph_info_multilinecomment.patch",
    "tftext.patch",
    "upb_platform_fix.patch",
    "upb_warning_turn_off.patch",
    "partial_2.18.patch",
    "tf_2.18_logging.patch",
    "bazel_rules_apple.patch",
    "mwaitpkg.patch",
    "pugixml_v1.13_flags.patch",

    // Scripts without a header
    "check_coverage.bat",
    "cleanup_jenkins.bat",
    "build_dependencies.sh",

    // Plain-text data and scan outputs
    "client_requirements.txt",
    "forbidden_functions.txt",
    "input_images.txt",
    "metrics_output.out",
    "missing_headers.txt",
    "opencv_cmake_flags.txt",
    "requirements.txt",
    "requirements_win.txt",
    "resnet_images.txt",
    "resnet_labels.txt",
    "vehicle_images.txt",
    "ssdlite_object_detection_labelmap.txt",
    "aipc.txt",
    "lib_files.txt",
    "lib_files_python.txt",
    "spelling-whitelist.txt",
    "results.txt",

    // Graph definitions
    "graph.pbtxt",
    "graph_gpu.pbtxt",
    "holistic_tracking.pbtxt",
    "iris_tracking.pbtxt",
    "graph_two_inputs_model.pbtxt",
];

/// Path fragments skipped by the forbidden-function check
pub const FUNCTION_EXCLUDE_FILES: &[&str] = &[
    // Tooling and VCS
    ".git",
    ".pytest_cache",
    ".venv",
    ".vscode",
    "__pycache__",
    "bazel-",
    ".bazelversion",
    "clang-format",

    // Binary, data and document formats
    ".bin",
    ".groovy",
    ".jpeg",
    ".jpg",
    ".json",
    ".npy",
    ".png",
    ".svg",
    ".tar.gz",
    ".xml",
    "docx",
    "md",

    // Generated or third-party files
    "Doxyfile",
    "REST_age_gender.ipynb",
    "genhtml",
    "third_party/python/BUILD",
    "libevent/BUILD",
    "ovms-c/dist",
    "yarn.lock",
    "BUILD.bazel",
    "package.json",
    "internal_tests",

    // Licenses
    "boost.LICENSE.txt",
    "c-ares.LICENSE.txt",
    "libuuid.LICENSE.txt",
    "license.txt",
    "openvino.LICENSE.txt",
    "zlib.LICENSE.txt",

    // Patches
    "abseil_gcc_8.5_constant_expression.patch",
    "azure_sdk.patch",
    "listen.patch",
    "net_http.patch",
    "partial.patch",
    "ovms_drogon_trantor.patch",
    "rest_sdk_v2.10.16.patch",
    "tf.patch",
    "tf_graph_info_multilinecomment.patch",
    "tftext.patch",
    "partial_2.18.patch",
    "tf_2.18_logging.patch",
    "bazel_rules_apple.patch",

    // Scripts
    "check_coverage.bat",
    "cleanup_jenkins.bat",
    "build_dependencies.sh",

    // Plain-text data and scan outputs
    "client_requirements.txt",
    "forbidden_functions.txt",
    "input_images.txt",
    "metrics_output.out",
    "missing_headers.txt",
    "requirements.txt",
    "requirements_win.txt",

    // Graph definitions
    "graph.pbtxt",
    "graph_gpu.pbtxt",
    "iris_tracking.pbtxt",
];

/// Directory fragments whose files the header check never opens
pub const HEADER_EXCLUDE_DIRECTORIES: &[&str] = &["/dist/", "release_files/thirdparty-licenses"];

/// Directory fragments whose files the forbidden-function check never opens
pub const FUNCTION_EXCLUDE_DIRECTORIES: &[&str] = &["/dist/"];

/// Reviewed forbidden-function usages, keyed by file path
pub const DEFAULT_EXEMPTIONS: &[(&str, &str)] = &[(
    "./src/test/ensemble_flow_custom_node_tests.cpp",
    "size_t strLen = std::strlen(str);size_t prefixLen = std::strlen(prefix);",
)];
