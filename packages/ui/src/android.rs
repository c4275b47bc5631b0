//! Android bridges that the webview cannot provide.
//!
//! Both calls go through the activity that `ndk-context` holds for the app.
//! Sharing uses `androidx.core.content.FileProvider`, so the app manifest must
//! declare a provider with authority `<package>.fileprovider` whose paths
//! include `cache-path`.

use std::path::{Path, PathBuf};

use jni::objects::{JClass, JObject, JString, JValue};
use jni::{JNIEnv, JavaVM};

const ACTION_SEND: &str = "android.intent.action.SEND";
const EXTRA_STREAM: &str = "android.intent.extra.STREAM";
const FLAG_GRANT_READ_URI_PERMISSION: i32 = 0x0000_0001;

fn with_activity<T>(
    f: impl for<'local> FnOnce(&mut JNIEnv<'local>, &JObject<'local>) -> jni::errors::Result<T>,
) -> Result<T, String> {
    let ctx = ndk_context::android_context();
    // SAFETY: ndk-context holds a valid JavaVM and a global ref to the activity
    // for the lifetime of the app.
    let vm = unsafe { JavaVM::from_raw(ctx.vm().cast()) }.map_err(|e| e.to_string())?;
    let activity = unsafe { JObject::from_raw(ctx.context().cast()) };
    let mut guard = vm.attach_current_thread().map_err(|e| e.to_string())?;
    let env: &mut JNIEnv = &mut guard;

    let result = f(&mut *env, &activity);
    if env.exception_check().unwrap_or(false) {
        let _ = env.exception_describe();
        let _ = env.exception_clear();
    }
    result.map_err(|e| e.to_string())
}

fn string_result(env: &mut JNIEnv, value: JObject) -> jni::errors::Result<String> {
    let value = JString::from(value);
    let text: String = env.get_string(&value)?.into();
    Ok(text)
}

/// The app-private cache directory (`Context.getCacheDir()`).
pub fn cache_dir() -> Result<PathBuf, String> {
    with_activity(|env, activity| {
        let dir = env
            .call_method(activity, "getCacheDir", "()Ljava/io/File;", &[])?
            .l()?;
        let path = env
            .call_method(&dir, "getAbsolutePath", "()Ljava/lang/String;", &[])?
            .l()?;
        Ok(PathBuf::from(string_result(env, path)?))
    })
}

/// Open the system share sheet (`ACTION_SEND`) for a file in the cache dir.
pub fn share_file(path: &Path, mime_type: &str, title: &str) -> Result<(), String> {
    with_activity(|env, activity| {
        let path = env.new_string(path.to_string_lossy())?;
        let file = env.new_object("java/io/File", "(Ljava/lang/String;)V", &[JValue::Object(&path)])?;

        let package = env
            .call_method(activity, "getPackageName", "()Ljava/lang/String;", &[])?
            .l()?;
        let package = string_result(env, package)?;
        let authority = env.new_string(format!("{package}.fileprovider"))?;

        // App classes are only visible through the activity's class loader.
        let loader = env
            .call_method(activity, "getClassLoader", "()Ljava/lang/ClassLoader;", &[])?
            .l()?;
        let provider_name = env.new_string("androidx.core.content.FileProvider")?;
        let provider = JClass::from(
            env.call_method(
                &loader,
                "loadClass",
                "(Ljava/lang/String;)Ljava/lang/Class;",
                &[JValue::Object(&provider_name)],
            )?
            .l()?,
        );
        let uri = env
            .call_static_method(
                &provider,
                "getUriForFile",
                "(Landroid/content/Context;Ljava/lang/String;Ljava/io/File;)Landroid/net/Uri;",
                &[
                    JValue::Object(activity),
                    JValue::Object(&authority),
                    JValue::Object(&file),
                ],
            )?
            .l()?;

        let action = env.new_string(ACTION_SEND)?;
        let intent = env.new_object(
            "android/content/Intent",
            "(Ljava/lang/String;)V",
            &[JValue::Object(&action)],
        )?;
        let mime_type = env.new_string(mime_type)?;
        env.call_method(
            &intent,
            "setType",
            "(Ljava/lang/String;)Landroid/content/Intent;",
            &[JValue::Object(&mime_type)],
        )?;
        let extra = env.new_string(EXTRA_STREAM)?;
        env.call_method(
            &intent,
            "putExtra",
            "(Ljava/lang/String;Landroid/os/Parcelable;)Landroid/content/Intent;",
            &[JValue::Object(&extra), JValue::Object(&uri)],
        )?;
        env.call_method(
            &intent,
            "addFlags",
            "(I)Landroid/content/Intent;",
            &[JValue::Int(FLAG_GRANT_READ_URI_PERMISSION)],
        )?;

        let title = env.new_string(title)?;
        let chooser = env
            .call_static_method(
                "android/content/Intent",
                "createChooser",
                "(Landroid/content/Intent;Ljava/lang/CharSequence;)Landroid/content/Intent;",
                &[JValue::Object(&intent), JValue::Object(&title)],
            )?
            .l()?;
        env.call_method(
            activity,
            "startActivity",
            "(Landroid/content/Intent;)V",
            &[JValue::Object(&chooser)],
        )?;
        Ok(())
    })
}
