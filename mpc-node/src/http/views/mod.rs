pub mod components;
pub mod synthetic;

pub fn html_page(body: String) -> String {
    format!(
        r#"
<!DOCTYPE html>
<html lang="en">

<head>
  <meta charset="utf-8">
  <title>MPC Lookup</title>
  <meta name="author" content="">
  <meta name="description" content="">
  <meta name="viewport" content="width=device-width, initial-scale=1">

  <script src="https://cdn.tailwindcss.com"></script>
</head>

<body>
  {body}
</body>

</html>
"#
    )
}
